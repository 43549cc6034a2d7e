use crate::model::{ResolverTestResult, Resolvers};

use super::*;

impl RemoteClient {
    pub fn list_resolvers(&self) -> Result<Resolvers> {
        self.get_value(&["resolver", ""], "list resolvers")
    }

    pub fn fetch_resolver(&self, name: &str) -> Result<Resolvers> {
        self.get_value(&["resolver", name], "get resolver")
    }

    pub fn put_resolver(&self, name: &str, params: &ResolverParams) -> Result<Ack> {
        let (ack, _) = self.post_value(&["resolver", name], params, "set resolver")?;
        tracing::info!(resolver = name, "resolver saved");
        Ok(ack)
    }

    pub fn delete_resolver(&self, name: &str) -> Result<Ack> {
        self.delete_value(&["resolver", name], "delete resolver")
    }

    pub fn check_resolver(&self, params: &ResolverParams) -> Result<ResolverTestResult> {
        let (ok, detail): (serde_json::Value, EnvelopeDetail) =
            self.post_value(&["resolver", "test"], params, "test resolver")?;
        Ok(ResolverTestResult {
            ok: ok.as_bool().unwrap_or(false),
            description: detail.description.unwrap_or_default(),
        })
    }
}
