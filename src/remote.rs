use anyhow::{Context, Result};

use crate::model::ConnectionConfig;

mod api;
mod http_client;
pub use self::api::{Ack, ConfigApi, ConfigMap, ResolverParams};

mod types;
pub use self::types::*;
mod auth_session;
mod policy_ops;
mod realm_ops;
mod resolver_ops;
mod system_ops;

pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(connection: &ConnectionConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("piadmin")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: connection.base_url.clone(),
            token: connection.token.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ConfigApi for RemoteClient {
    fn get_policies(&self) -> Result<Vec<crate::model::Policy>> {
        self.list_policies()
    }
    fn get_policy(&self, name: &str) -> Result<Option<crate::model::Policy>> {
        self.fetch_policy(name)
    }
    fn set_policy(&self, name: &str, params: &crate::model::PolicyParams) -> Result<Ack> {
        self.put_policy(name, params)
    }
    fn del_policy(&self, name: &str) -> Result<Ack> {
        self.delete_policy(name)
    }
    fn enable_policy(&self, name: &str) -> Result<Ack> {
        self.toggle_policy(name, true)
    }
    fn disable_policy(&self, name: &str) -> Result<Ack> {
        self.toggle_policy(name, false)
    }
    fn get_policy_defs(&self) -> Result<crate::model::PolicyDefs> {
        self.fetch_policy_defs()
    }

    fn get_realms(&self) -> Result<crate::model::Realms> {
        self.list_realms()
    }
    fn set_realm(&self, name: &str, resolvers: &str) -> Result<Ack> {
        self.put_realm(name, resolvers)
    }
    fn del_realm(&self, name: &str) -> Result<Ack> {
        self.delete_realm(name)
    }
    fn set_default_realm(&self, name: &str) -> Result<Ack> {
        self.put_default_realm(name)
    }
    fn clear_default_realm(&self) -> Result<Ack> {
        self.delete_default_realm()
    }

    fn get_resolvers(&self) -> Result<crate::model::Resolvers> {
        self.list_resolvers()
    }
    fn get_resolver(&self, name: &str) -> Result<crate::model::Resolvers> {
        self.fetch_resolver(name)
    }
    fn set_resolver(&self, name: &str, params: &ResolverParams) -> Result<Ack> {
        self.put_resolver(name, params)
    }
    fn del_resolver(&self, name: &str) -> Result<Ack> {
        self.delete_resolver(name)
    }
    fn test_resolver(&self, params: &ResolverParams) -> Result<crate::model::ResolverTestResult> {
        self.check_resolver(params)
    }

    fn get_system_config(&self) -> Result<ConfigMap> {
        self.fetch_system_config()
    }
    fn save_system_config(&self, entries: &ConfigMap) -> Result<Ack> {
        self.put_system_config(entries)
    }
}
