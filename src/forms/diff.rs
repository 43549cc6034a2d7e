//! Key/value forms that submit only what changed since load.

use anyhow::Result;

use crate::model::ConfigValue;
use crate::remote::{Ack, ConfigApi, ConfigMap};

/// A live configuration model plus the snapshot it was loaded from.
#[derive(Clone, Debug, Default)]
pub struct DiffForm {
    live: ConfigMap,
    original: ConfigMap,
}

impl DiffForm {
    /// Starts a form from an already-fetched snapshot.
    pub fn from_snapshot(snapshot: ConfigMap) -> Self {
        Self {
            original: snapshot.clone(),
            live: snapshot,
        }
    }

    /// Fetches the system configuration and snapshots it.
    pub fn load(api: &dyn ConfigApi) -> Result<Self> {
        Ok(Self::from_snapshot(api.get_system_config()?))
    }

    pub fn live(&self) -> &ConfigMap {
        &self.live
    }

    pub fn original(&self) -> &ConfigMap {
        &self.original
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.live.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.live.insert(key.into(), value);
    }

    /// Sets `key` to `value` when it is absent or an empty string.
    pub fn set_default(&mut self, key: &str, value: ConfigValue) {
        let missing = self.live.get(key).is_none_or(|v| v.is_empty_text());
        if missing {
            self.live.insert(key.to_string(), value);
        }
    }

    /// Entries whose live value differs from the snapshot, by strict equality.
    pub fn changed(&self) -> ConfigMap {
        self.live
            .iter()
            .filter(|(k, v)| self.original.get(*k) != Some(*v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn is_dirty(&self) -> bool {
        self.live
            .iter()
            .any(|(k, v)| self.original.get(k) != Some(v))
    }

    /// Submits the changed entries. Returns what was sent and the server ack,
    /// or `None` when nothing changed and no request was made.
    ///
    /// The snapshot is kept as loaded; call [`DiffForm::rebase`] to diff a
    /// later save against the values just submitted.
    pub fn save(&self, api: &dyn ConfigApi) -> Result<Option<(ConfigMap, Ack)>> {
        let changed = self.changed();
        if changed.is_empty() {
            tracing::debug!("no configuration changes to save");
            return Ok(None);
        }
        let ack = api.save_system_config(&changed)?;
        Ok(Some((changed, ack)))
    }

    /// Promotes the live model to the new snapshot.
    pub fn rebase(&mut self) {
        self.original = self.live.clone();
    }
}

#[cfg(test)]
#[path = "../tests/forms/diff_tests.rs"]
mod tests;
