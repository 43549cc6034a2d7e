use clap::Subcommand;

pub(crate) mod policy;
pub(crate) mod realm;
pub(crate) mod resolver;
pub(crate) mod session;
pub(crate) mod settings;

pub(crate) use self::policy::PolicyCommands;
pub(crate) use self::realm::RealmCommands;
pub(crate) use self::resolver::ResolverCommands;
pub(crate) use self::settings::{SystemCommands, TokenConfigCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in to a server (store its URL and an auth token)
    Login(session::LoginArgs),

    /// Log out (clear the stored token)
    Logout,

    /// Manage policies
    Policy {
        #[command(subcommand)]
        command: PolicyCommands,
    },

    /// Manage realms
    Realm {
        #[command(subcommand)]
        command: RealmCommands,
    },

    /// Manage user resolvers
    Resolver {
        #[command(subcommand)]
        command: ResolverCommands,
    },

    /// Show or change system settings
    System {
        #[command(subcommand)]
        command: SystemCommands,
    },

    /// Show or change token-type settings
    #[command(name = "token-config")]
    TokenConfig {
        #[command(subcommand)]
        command: TokenConfigCommands,
    },
}
