use serde::{Deserialize, Serialize};

use super::ResolverForm;
use crate::model::ResolverKind;

/// Flat-file (`/etc/passwd` style) resolver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswdParams {
    #[serde(rename = "fileName")]
    pub file_name: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for PasswdParams {
    fn default() -> Self {
        Self {
            file_name: "/etc/passwd".to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

impl ResolverForm for PasswdParams {
    const KIND: ResolverKind = ResolverKind::Passwd;
}
