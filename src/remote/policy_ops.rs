use crate::model::{Policy, PolicyDefs, PolicyParams};

use super::*;

impl RemoteClient {
    pub fn list_policies(&self) -> Result<Vec<Policy>> {
        self.get_value(&["policy", ""], "list policies")
    }

    /// The server answers a name filter with a list; the first hit wins.
    pub fn fetch_policy(&self, name: &str) -> Result<Option<Policy>> {
        let found: Vec<Policy> =
            self.get_query_value(&["policy", ""], &[("name", name)], "get policy")?;
        Ok(found.into_iter().next())
    }

    pub fn put_policy(&self, name: &str, params: &PolicyParams) -> Result<Ack> {
        let (ack, _) = self.post_value(&["policy", name], params, "set policy")?;
        tracing::info!(policy = name, scope = %params.scope, "policy saved");
        Ok(ack)
    }

    pub fn delete_policy(&self, name: &str) -> Result<Ack> {
        self.delete_value(&["policy", name], "delete policy")
    }

    pub fn toggle_policy(&self, name: &str, enable: bool) -> Result<Ack> {
        let (verb, label) = if enable {
            ("enable", "enable policy")
        } else {
            ("disable", "disable policy")
        };
        let (ack, _) = self.post_value(&["policy", verb, name], &serde_json::json!({}), label)?;
        Ok(ack)
    }

    pub fn fetch_policy_defs(&self) -> Result<PolicyDefs> {
        self.get_value(&["policy", "defs"], "get policy definitions")
    }
}
