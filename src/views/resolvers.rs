use anyhow::{Context, Result};

use crate::model::{ResolverKind, Resolvers};
use crate::remote::{Ack, ConfigApi};

#[derive(Clone, Debug, Default)]
pub struct ResolversView {
    pub resolvers: Resolvers,
    pub last_result: Option<Ack>,
}

impl ResolversView {
    /// Resolver types the console can create and edit.
    pub const AVAILABLE_TYPES: [ResolverKind; 3] = ResolverKind::ALL;

    pub fn load(api: &dyn ConfigApi) -> Result<Self> {
        Ok(Self {
            resolvers: api.get_resolvers()?,
            last_result: None,
        })
    }

    pub fn refresh(&mut self, api: &dyn ConfigApi) -> Result<()> {
        self.resolvers = api.get_resolvers()?;
        Ok(())
    }

    pub fn del_resolver(&mut self, api: &dyn ConfigApi, name: &str) -> Result<()> {
        self.last_result = Some(api.del_resolver(name)?);
        self.refresh(api)
    }

    /// Which sub-form edits resolver `name`.
    pub fn edit_kind(&self, name: &str) -> Result<ResolverKind> {
        let record = self
            .resolvers
            .get(name)
            .with_context(|| format!("unknown resolver {:?}", name))?;
        Self::AVAILABLE_TYPES
            .into_iter()
            .find(|k| k.as_str() == record.kind)
            .with_context(|| format!("resolver type {:?} cannot be edited here", record.kind))
    }
}

#[cfg(test)]
#[path = "../tests/views/resolvers_tests.rs"]
mod tests;
