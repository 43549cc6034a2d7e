use serde::{Deserialize, Serialize};

/// Persisted connection settings of the console.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub version: u32,

    #[serde(default)]
    pub connection: Option<ConnectionConfig>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            version: 1,
            connection: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Authorization token returned by `/auth`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
