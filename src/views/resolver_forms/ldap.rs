use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ResolverForm, lenient_u32};
use crate::model::{ResolverKind, decode_noreferrals, encode_noreferrals};

pub const AUTH_TYPES: [&str; 2] = ["Simple", "SASL Digest-MD5"];

/// LDAP directory resolver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapParams {
    #[serde(rename = "LDAPURI")]
    pub ldap_uri: String,

    #[serde(rename = "LDAPBASE")]
    pub ldap_base: String,

    #[serde(rename = "BINDDN")]
    pub bind_dn: String,

    #[serde(rename = "BINDPW")]
    pub bind_pw: String,

    #[serde(rename = "LOGINNAMEATTRIBUTE")]
    pub login_name_attribute: String,

    #[serde(rename = "LDAPSEARCHFILTER")]
    pub search_filter: String,

    #[serde(rename = "LDAPFILTER")]
    pub user_filter: String,

    /// JSON mapping of console attributes to LDAP attributes.
    #[serde(rename = "USERINFO")]
    pub user_info: String,

    #[serde(
        rename = "SIZELIMIT",
        deserialize_with = "lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub size_limit: Option<u32>,

    #[serde(
        rename = "TIMEOUT",
        deserialize_with = "lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<u32>,

    #[serde(
        rename = "NOREFERRALS",
        deserialize_with = "de_noreferrals",
        serialize_with = "ser_noreferrals"
    )]
    pub no_referrals: bool,

    #[serde(rename = "CACERTIFICATE")]
    pub ca_certificate: String,

    #[serde(rename = "UIDTYPE")]
    pub uid_type: String,

    #[serde(rename = "AUTHTYPE")]
    pub auth_type: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for LdapParams {
    fn default() -> Self {
        Self {
            ldap_uri: String::new(),
            ldap_base: String::new(),
            bind_dn: String::new(),
            bind_pw: String::new(),
            login_name_attribute: String::new(),
            search_filter: String::new(),
            user_filter: String::new(),
            user_info: String::new(),
            size_limit: Some(500),
            timeout: Some(5),
            no_referrals: false,
            ca_certificate: String::new(),
            uid_type: "DN".to_string(),
            auth_type: "Simple".to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

impl ResolverForm for LdapParams {
    const KIND: ResolverKind = ResolverKind::Ldap;
}

/// Attribute mappings for common directory servers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LdapPreset {
    ActiveDirectory,
    OpenLdap,
}

impl FromStr for LdapPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ad" | "active-directory" => Ok(LdapPreset::ActiveDirectory),
            "ldap" | "openldap" => Ok(LdapPreset::OpenLdap),
            other => anyhow::bail!("unknown LDAP preset {:?} (expected ad|openldap)", other),
        }
    }
}

impl LdapParams {
    pub fn apply_preset(&mut self, preset: LdapPreset) {
        match preset {
            LdapPreset::ActiveDirectory => {
                self.login_name_attribute = "sAMAccountName".to_string();
                self.search_filter = "(sAMAccountName=*)(objectClass=person)".to_string();
                self.user_filter = "(&(sAMAccountName=%s)(objectClass=person))".to_string();
                self.user_info = r#"{ "username": "sAMAccountName", "phone" : "telephoneNumber", "mobile" : "mobile", "email" : "mail", "surname" : "sn", "givenname" : "givenName" }"#.to_string();
                self.uid_type = "DN".to_string();
            }
            LdapPreset::OpenLdap => {
                self.login_name_attribute = "uid".to_string();
                self.search_filter = "(uid=*)(objectClass=inetOrgPerson)".to_string();
                self.user_filter = "(&(uid=%s)(objectClass=inetOrgPerson))".to_string();
                self.user_info = r#"{ "username": "uid", "phone" : "telephoneNumber", "mobile" : "mobile", "email" : "mail", "surname" : "sn", "givenname" : "givenName" }"#.to_string();
                self.uid_type = "entryUUID".to_string();
            }
        }
        self.no_referrals = true;
        self.size_limit = Some(500);
        self.auth_type = "SASL Digest-MD5".to_string();
    }
}

fn de_noreferrals<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(decode_noreferrals(v.as_ref()))
}

fn ser_noreferrals<S>(v: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    encode_noreferrals(*v).serialize(serializer)
}
