use crate::model::Realms;

use super::*;

impl RemoteClient {
    pub fn list_realms(&self) -> Result<Realms> {
        self.get_value(&["realm", ""], "list realms")
    }

    pub fn put_realm(&self, name: &str, resolvers: &str) -> Result<Ack> {
        let (ack, _) = self.post_value(
            &["realm", name],
            &SetRealmRequest { resolvers },
            "set realm",
        )?;
        tracing::info!(realm = name, resolvers, "realm saved");
        Ok(ack)
    }

    pub fn delete_realm(&self, name: &str) -> Result<Ack> {
        self.delete_value(&["realm", name], "delete realm")
    }

    pub fn put_default_realm(&self, name: &str) -> Result<Ack> {
        let (ack, _) = self.post_value(
            &["defaultrealm", name],
            &serde_json::json!({}),
            "set default realm",
        )?;
        Ok(ack)
    }

    pub fn delete_default_realm(&self) -> Result<Ack> {
        self.delete_value(&["defaultrealm"], "clear default realm")
    }
}
