use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The user-directory connector types the console can edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolverKind {
    #[serde(rename = "passwdresolver")]
    Passwd,
    #[serde(rename = "ldapresolver")]
    Ldap,
    #[serde(rename = "sqlresolver")]
    Sql,
}

impl ResolverKind {
    pub const ALL: [ResolverKind; 3] = [ResolverKind::Passwd, ResolverKind::Ldap, ResolverKind::Sql];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverKind::Passwd => "passwdresolver",
            ResolverKind::Ldap => "ldapresolver",
            ResolverKind::Sql => "sqlresolver",
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolverRecord {
    #[serde(default)]
    pub resolvername: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Resolvers keyed by resolver name.
pub type Resolvers = BTreeMap<String, ResolverRecord>;

/// Outcome of a resolver connection test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverTestResult {
    pub ok: bool,
    pub description: String,
}
