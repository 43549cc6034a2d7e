use std::collections::BTreeMap;

use anyhow::{Result, bail};

use crate::forms::join2;
use crate::model::{Realms, Resolvers};
use crate::remote::{Ack, ConfigApi};

/// Realm management: list, edit the resolvers of a realm, default realm.
#[derive(Clone, Debug, Default)]
pub struct RealmsView {
    pub realms: Realms,
    pub resolvers: Resolvers,
    pub edit_realm: Option<String>,
    pub selected_resolvers: BTreeMap<String, bool>,
    /// `result.value` of the last mutating call.
    pub last_result: Option<Ack>,
}

impl RealmsView {
    pub fn load(api: &dyn ConfigApi) -> Result<Self> {
        let (realms, resolvers) = join2(|| api.get_realms(), || api.get_resolvers())?;
        Ok(Self {
            realms,
            resolvers,
            ..Self::default()
        })
    }

    pub fn refresh(&mut self, api: &dyn ConfigApi) -> Result<()> {
        self.realms = api.get_realms()?;
        Ok(())
    }

    pub fn default_realm(&self) -> Option<&str> {
        self.realms
            .iter()
            .find(|(_, r)| r.default)
            .map(|(name, _)| name.as_str())
    }

    /// Starts editing `name`, preselecting its current resolvers. A realm that
    /// does not exist yet starts empty.
    pub fn start_edit(&mut self, name: &str) {
        self.edit_realm = Some(name.to_string());
        self.selected_resolvers = self
            .realms
            .get(name)
            .map(|realm| {
                realm
                    .resolver
                    .iter()
                    .map(|r| (r.name.clone(), true))
                    .collect()
            })
            .unwrap_or_default();
    }

    pub fn cancel_edit(&mut self) {
        self.edit_realm = None;
        self.selected_resolvers.clear();
    }

    pub fn select_resolver(&mut self, name: &str, on: bool) -> Result<()> {
        if !self.resolvers.contains_key(name) {
            bail!("unknown resolver {:?}", name);
        }
        self.selected_resolvers.insert(name.to_string(), on);
        Ok(())
    }

    /// Comma-joined names of the selected resolvers.
    pub fn selected_csv(&self) -> String {
        self.selected_resolvers
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Saves realm `name` with the selected resolvers and ends the edit.
    pub fn set_realm(&mut self, api: &dyn ConfigApi, name: &str) -> Result<()> {
        let csv = self.selected_csv();
        if csv.is_empty() {
            bail!("a realm needs at least one resolver");
        }
        self.last_result = Some(api.set_realm(name, &csv)?);
        self.cancel_edit();
        self.refresh(api)
    }

    pub fn del_realm(&mut self, api: &dyn ConfigApi, name: &str) -> Result<()> {
        self.last_result = Some(api.del_realm(name)?);
        self.refresh(api)
    }

    pub fn set_default_realm(&mut self, api: &dyn ConfigApi, name: &str) -> Result<()> {
        self.last_result = Some(api.set_default_realm(name)?);
        self.refresh(api)
    }

    pub fn clear_default_realm(&mut self, api: &dyn ConfigApi) -> Result<()> {
        self.last_result = Some(api.clear_default_realm()?);
        self.refresh(api)
    }
}

#[cfg(test)]
#[path = "../tests/views/realms_tests.rs"]
mod tests;
