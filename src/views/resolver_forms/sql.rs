use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ResolverForm, lenient_u32};
use crate::model::ResolverKind;

/// SQL table resolver.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqlParams {
    #[serde(rename = "Driver")]
    pub driver: String,

    #[serde(rename = "Server")]
    pub server: String,

    #[serde(
        rename = "Port",
        deserialize_with = "lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<u32>,

    #[serde(rename = "Database")]
    pub database: String,

    #[serde(rename = "User")]
    pub user: String,

    #[serde(rename = "Password")]
    pub password: String,

    #[serde(rename = "Table")]
    pub table: String,

    /// JSON mapping of console attributes to table columns.
    #[serde(rename = "Map")]
    pub map: String,

    #[serde(rename = "Where")]
    pub where_clause: String,

    #[serde(rename = "Encoding")]
    pub encoding: String,

    #[serde(rename = "conParams")]
    pub con_params: String,

    #[serde(
        rename = "Limit",
        deserialize_with = "lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<u32>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ResolverForm for SqlParams {
    const KIND: ResolverKind = ResolverKind::Sql;
}

/// Table layouts of applications whose user tables are commonly reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlPreset {
    Wordpress,
    Otrs,
    Tine,
    Owncloud,
}

impl FromStr for SqlPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wordpress" => Ok(SqlPreset::Wordpress),
            "otrs" => Ok(SqlPreset::Otrs),
            "tine" | "tine20" => Ok(SqlPreset::Tine),
            "owncloud" => Ok(SqlPreset::Owncloud),
            other => anyhow::bail!(
                "unknown SQL preset {:?} (expected wordpress|otrs|tine|owncloud)",
                other
            ),
        }
    }
}

impl SqlParams {
    pub fn apply_preset(&mut self, preset: SqlPreset) {
        let (table, map) = match preset {
            SqlPreset::Wordpress => (
                "wp_users",
                r#"{ "userid" : "ID", "username": "user_login", "email" : "user_email", "givenname" : "display_name", "password" : "user_pass" }"#,
            ),
            SqlPreset::Otrs => (
                "users",
                r#"{ "userid" : "id", "username": "login", "givenname" : "first_name", "surname" : "last_name", "password" : "pw" }"#,
            ),
            SqlPreset::Tine => (
                "tine20_accounts",
                r#"{ "userid" : "id", "username": "login_name", "email" : "email", "givenname" : "first_name", "surname" : "last_name", "password" : "password" }"#,
            ),
            SqlPreset::Owncloud => (
                "oc_users",
                r#"{ "userid" : "uid", "username": "uid", "givenname" : "displayname", "password" : "password" }"#,
            ),
        };
        self.table = table.to_string();
        self.map = map.to_string();
    }
}
