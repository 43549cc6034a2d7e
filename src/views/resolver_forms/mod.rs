//! Editors for the user-directory connector types.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{ResolverKind, ResolverTestResult};
use crate::remote::{Ack, ApiError, ConfigApi, ResolverParams};

mod ldap;
mod passwd;
mod sql;

pub use self::ldap::{AUTH_TYPES, LdapParams, LdapPreset};
pub use self::passwd::PasswdParams;
pub use self::sql::{SqlParams, SqlPreset};

/// Shared load/save/test behaviour of the resolver editors.
///
/// Implementors are serde structs whose unknown fields are kept in a
/// flattened map, so a load/save cycle never drops server-side settings.
pub trait ResolverForm: Default + Serialize + DeserializeOwned {
    const KIND: ResolverKind;

    fn from_data(data: ResolverParams) -> Result<Self> {
        serde_json::from_value(serde_json::Value::Object(data))
            .with_context(|| format!("parse {} parameters", Self::KIND))
    }

    /// Parameters as submitted, with `type` always set to [`Self::KIND`].
    fn to_params(&self) -> Result<ResolverParams> {
        let serde_json::Value::Object(mut params) =
            serde_json::to_value(self).context("serialize resolver parameters")?
        else {
            bail!("resolver parameters must serialize to an object");
        };
        params.insert(
            "type".to_string(),
            serde_json::Value::String(Self::KIND.as_str().to_string()),
        );
        Ok(params)
    }

    /// Loads an existing resolver for editing.
    fn load(api: &dyn ConfigApi, name: &str) -> Result<Self> {
        let mut found = api.get_resolver(name)?;
        let Some(record) = found.remove(name) else {
            return Err(ApiError::NotFound(format!("resolver {}", name)).into());
        };
        if record.kind != Self::KIND.as_str() {
            bail!(
                "resolver {:?} has type {:?}, not {}",
                name,
                record.kind,
                Self::KIND
            );
        }
        Self::from_data(record.data)
    }

    fn save(&self, api: &dyn ConfigApi, name: &str) -> Result<Ack> {
        if name.trim().is_empty() {
            bail!("resolver name is required");
        }
        api.set_resolver(name, &self.to_params()?)
    }

    /// Asks the server to try the connection with the current parameters.
    fn test(&self, api: &dyn ConfigApi) -> Result<ResolverTestResult> {
        api.test_resolver(&self.to_params()?)
    }
}

/// Accepts a number, a numeric string, or an empty string (as unset).
pub(super) fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    match v {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("{} is out of range", n))),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {:?}", s))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/views/resolver_forms_tests.rs"]
mod tests;
