use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RealmResolver {
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Realm {
    #[serde(default)]
    pub default: bool,

    #[serde(default)]
    pub resolver: Vec<RealmResolver>,
}

/// Realms keyed by realm name.
pub type Realms = BTreeMap<String, Realm>;
