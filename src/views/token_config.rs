use anyhow::Result;
use serde::Serialize;

use crate::forms::DiffForm;
use crate::model::ConfigValue;
use crate::remote::{Ack, ConfigApi, ConfigMap};

pub const DEFAULT_TOKEN_TYPE: &str = "hotp";

pub const DEFAULT_SMS_PROVIDER: &str =
    "privacyidea.lib.smsprovider.HttpSMSProvider.HttpSMSProvider";

/// Choices offered by the token settings inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub totp_steps: Vec<&'static str>,
    pub hashlibs: Vec<&'static str>,
    pub sms_providers: Vec<&'static str>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            totp_steps: vec!["30", "60"],
            hashlibs: vec!["sha1", "sha256", "sha512"],
            sms_providers: vec![
                DEFAULT_SMS_PROVIDER,
                "privacyidea.lib.smsprovider.SipgateSMSProvider.SipgateSMSProvider",
                "privacyidea.lib.smsprovider.SmtpSMSProvider.SmtpSMSProvider",
            ],
        }
    }
}

/// Token-type specific settings.
#[derive(Clone, Debug)]
pub struct TokenConfig {
    pub token_type: String,
    pub options: FormOptions,
    pub form: DiffForm,
}

impl TokenConfig {
    /// Loads the settings and fills defaults into the live model.
    ///
    /// Defaults are applied after the snapshot, so a default the server does
    /// not have yet is submitted with the next save.
    pub fn load(api: &dyn ConfigApi, token_type: Option<&str>) -> Result<Self> {
        let mut form = DiffForm::load(api)?;
        apply_defaults(&mut form);
        Ok(Self {
            token_type: token_type.unwrap_or(DEFAULT_TOKEN_TYPE).to_string(),
            options: FormOptions::default(),
            form,
        })
    }

    /// Settings of the selected token type (`<type>.` prefix).
    pub fn type_settings(&self) -> ConfigMap {
        let prefix = format!("{}.", self.token_type);
        self.form
            .live()
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        let value = ConfigValue::parse_like(self.form.get(key), raw)?;
        self.form.set(key, value);
        Ok(())
    }

    pub fn save(&self, api: &dyn ConfigApi) -> Result<Option<(ConfigMap, Ack)>> {
        self.form.save(api)
    }
}

fn apply_defaults(form: &mut DiffForm) {
    form.set_default("totp.timeStep", ConfigValue::text("30"));
    form.set_default("totp.hashlib", ConfigValue::text("sha1"));
    form.set_default("hotp.hashlib", ConfigValue::text("sha1"));
    form.set("radius.secret.type", ConfigValue::text("password"));
    form.set("radius.dictfile", ConfigValue::text("/etc/privacyidea/dictionary"));
    form.set_default("sms.Provider", ConfigValue::text(DEFAULT_SMS_PROVIDER));
}

#[cfg(test)]
#[path = "../tests/views/token_config_tests.rs"]
mod tests;
