//! One view model per console screen.
//!
//! A view is built when its screen is entered, holds the state the screen
//! edits, and talks to the server only through [`ConfigApi`](crate::remote::ConfigApi).

mod policy_details;
mod policy_list;
mod realms;
pub mod resolver_forms;
mod resolvers;
mod system;
mod token_config;

pub use self::policy_details::PolicyDetails;
pub use self::policy_list::PolicyList;
pub use self::realms::RealmsView;
pub use self::resolvers::ResolversView;
pub use self::system::{CHECKBOX_SETTINGS, SystemSettings};
pub use self::token_config::{
    DEFAULT_SMS_PROVIDER, DEFAULT_TOKEN_TYPE, FormOptions, TokenConfig,
};
