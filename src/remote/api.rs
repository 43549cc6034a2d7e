//! The operations the console views consume.
//!
//! [`RemoteClient`](super::RemoteClient) implements this over HTTP; view
//! models only ever see the trait, so they can run against any backend.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::model::{
    ConfigValue, Policy, PolicyDefs, PolicyParams, Realms, ResolverTestResult, Resolvers,
};

/// Raw `result.value` of a mutating call (usually an id or a boolean).
pub type Ack = serde_json::Value;

/// Resolver parameters as sent to the server.
pub type ResolverParams = serde_json::Map<String, serde_json::Value>;

/// A flat key/value configuration snapshot.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

pub trait ConfigApi: Sync {
    fn get_policies(&self) -> Result<Vec<Policy>>;
    fn get_policy(&self, name: &str) -> Result<Option<Policy>>;
    fn set_policy(&self, name: &str, params: &PolicyParams) -> Result<Ack>;
    fn del_policy(&self, name: &str) -> Result<Ack>;
    fn enable_policy(&self, name: &str) -> Result<Ack>;
    fn disable_policy(&self, name: &str) -> Result<Ack>;
    fn get_policy_defs(&self) -> Result<PolicyDefs>;

    fn get_realms(&self) -> Result<Realms>;
    /// `resolvers` is the comma-joined list of resolver names.
    fn set_realm(&self, name: &str, resolvers: &str) -> Result<Ack>;
    fn del_realm(&self, name: &str) -> Result<Ack>;
    fn set_default_realm(&self, name: &str) -> Result<Ack>;
    fn clear_default_realm(&self) -> Result<Ack>;

    fn get_resolvers(&self) -> Result<Resolvers>;
    /// Returns a map holding the one requested resolver, keyed by name.
    fn get_resolver(&self, name: &str) -> Result<Resolvers>;
    fn set_resolver(&self, name: &str, params: &ResolverParams) -> Result<Ack>;
    fn del_resolver(&self, name: &str) -> Result<Ack>;
    fn test_resolver(&self, params: &ResolverParams) -> Result<ResolverTestResult>;

    fn get_system_config(&self) -> Result<ConfigMap>;
    fn save_system_config(&self, entries: &ConfigMap) -> Result<Ack>;
}
