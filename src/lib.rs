//! Administration client for an identity-management server: typed view
//! models for policies, realms, resolvers and system/token settings.

pub mod forms;
pub mod model;
pub mod remote;
pub mod store;
pub mod views;

#[cfg(test)]
#[path = "tests/fake_api.rs"]
pub(crate) mod fake_api;
