use crate::model::ConfigValue;

use super::*;

impl RemoteClient {
    pub fn fetch_system_config(&self) -> Result<ConfigMap> {
        let raw: serde_json::Map<String, serde_json::Value> =
            self.get_value(&["system", ""], "get system config")?;
        Ok(raw
            .into_iter()
            .map(|(k, v)| (k, ConfigValue::from_json(v)))
            .collect())
    }

    pub fn put_system_config(&self, entries: &ConfigMap) -> Result<Ack> {
        let (ack, _) = self.post_value(&["system", "setConfig"], entries, "save system config")?;
        tracing::info!(keys = entries.len(), "system config saved");
        Ok(ack)
    }
}
