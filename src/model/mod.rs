mod config;
mod policy;
mod realm;
mod resolver;
mod values;

pub use self::config::{ConnectionConfig, ConsoleConfig};
pub use self::policy::{
    ActionDef, ActionType, GrantedAction, GrantedActions, Policy, PolicyDefs, PolicyParams,
    ScopeSchema, split_csv,
};
pub use self::realm::{Realm, RealmResolver, Realms};
pub use self::resolver::{ResolverKind, ResolverRecord, ResolverTestResult, Resolvers};
pub use self::values::{ConfigValue, decode_checked, decode_noreferrals, encode_noreferrals};
