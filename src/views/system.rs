use anyhow::Result;

use crate::forms::DiffForm;
use crate::model::{ConfigValue, decode_checked};
use crate::remote::{Ack, ConfigApi, ConfigMap};

/// System settings stored as "True"/"1" strings and edited as checkboxes.
pub const CHECKBOX_SETTINGS: [&str; 9] = [
    "PrependPin",
    "splitAtSign",
    "IncFailCountOnFalsePin",
    "ReturnSamlAttributes",
    "AutoResync",
    "PassOnUserNotFound",
    "PassOnUserNoToken",
    "UiLoginDisplayHelpButton",
    "UiLoginDisplayRealmBox",
];

/// System-wide authentication settings.
#[derive(Clone, Debug)]
pub struct SystemSettings {
    pub form: DiffForm,
}

impl SystemSettings {
    /// Loads the settings. Checkbox settings are decoded before the
    /// snapshot is taken, so decoding alone never shows up as a change.
    pub fn load(api: &dyn ConfigApi) -> Result<Self> {
        let mut snapshot = api.get_system_config()?;
        for key in CHECKBOX_SETTINGS {
            let checked = snapshot.get(key).is_some_and(decode_checked);
            snapshot.insert(key.to_string(), ConfigValue::Bool(checked));
        }
        Ok(Self {
            form: DiffForm::from_snapshot(snapshot),
        })
    }

    /// Sets `key` from admin input, keeping the type of the current value.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        let value = ConfigValue::parse_like(self.form.get(key), raw)?;
        self.form.set(key, value);
        Ok(())
    }

    pub fn save(&self, api: &dyn ConfigApi) -> Result<Option<(ConfigMap, Ack)>> {
        self.form.save(api)
    }
}

#[cfg(test)]
#[path = "../tests/views/system_tests.rs"]
mod tests;
