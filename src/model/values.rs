use std::fmt;

use serde::{Deserialize, Serialize};

/// A single system/token configuration value as the server reports it.
///
/// Equality is strict: `Text("30")` and `Int(30)` are different values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl ConfigValue {
    pub fn text(s: impl Into<String>) -> Self {
        ConfigValue::Text(s.into())
    }

    /// Converts an arbitrary JSON value from a config snapshot.
    pub fn from_json(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => ConfigValue::Text(String::new()),
            serde_json::Value::Bool(b) => ConfigValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Int(i),
                None => ConfigValue::Text(n.to_string()),
            },
            serde_json::Value::String(s) => ConfigValue::Text(s),
            other => ConfigValue::Text(other.to_string()),
        }
    }

    /// Parses user input, keeping the type of the value it replaces.
    ///
    /// Without a previous value the type is inferred from the text.
    pub fn parse_like(previous: Option<&ConfigValue>, raw: &str) -> anyhow::Result<Self> {
        match previous {
            Some(ConfigValue::Bool(_)) => match parse_bool_word(raw) {
                Some(b) => Ok(ConfigValue::Bool(b)),
                None => anyhow::bail!("expected a boolean (true/false), got {:?}", raw),
            },
            Some(ConfigValue::Int(_)) => raw
                .trim()
                .parse::<i64>()
                .map(ConfigValue::Int)
                .map_err(|_| anyhow::anyhow!("expected an integer, got {:?}", raw)),
            Some(ConfigValue::Text(_)) => Ok(ConfigValue::Text(raw.to_string())),
            None => {
                if let Some(b) = parse_bool_word(raw) {
                    return Ok(ConfigValue::Bool(b));
                }
                if let Ok(i) = raw.trim().parse::<i64>() {
                    return Ok(ConfigValue::Int(i));
                }
                Ok(ConfigValue::Text(raw.to_string()))
            }
        }
    }

    pub fn is_empty_text(&self) -> bool {
        matches!(self, ConfigValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::Text(s) => write!(f, "{}", s),
        }
    }
}

fn parse_bool_word(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "True" => Some(true),
        "false" | "False" => Some(false),
        _ => None,
    }
}

/// Decodes a checkbox-style system setting.
///
/// The server stores these as strings; `true`, `1`, `"1"` and `"True"` are set.
pub fn decode_checked(v: &ConfigValue) -> bool {
    match v {
        ConfigValue::Bool(b) => *b,
        ConfigValue::Int(i) => *i == 1,
        ConfigValue::Text(s) => s == "1" || s == "True",
    }
}

/// Decodes the LDAP `NOREFERRALS` field. Only `"1"` (or its typed
/// equivalents) is set; anything else, including absence, is unset.
pub fn decode_noreferrals(v: Option<&serde_json::Value>) -> bool {
    match v {
        Some(serde_json::Value::String(s)) => s == "1",
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}

/// Encodes the LDAP `NOREFERRALS` field for the wire.
pub fn encode_noreferrals(v: bool) -> serde_json::Value {
    serde_json::Value::String(if v { "1" } else { "0" }.to_string())
}
