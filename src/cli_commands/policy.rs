use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum PolicyCommands {
    /// List policies
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a policy with its action form
    Show {
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the action definitions of each scope
    Defs {
        /// Only this scope
        #[arg(long)]
        scope: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create or update a policy
    Set {
        name: String,
        /// Scope (required for a new policy; switching scope drops granted actions)
        #[arg(long)]
        scope: Option<String>,
        /// Realm to apply to (repeatable; replaces the current selection)
        #[arg(long = "realm")]
        realms: Vec<String>,
        /// Resolver to apply to (repeatable; replaces the current selection)
        #[arg(long = "resolver")]
        resolvers: Vec<String>,
        /// Comma-separated user names
        #[arg(long)]
        user: Option<String>,
        /// Comma-separated client addresses
        #[arg(long)]
        client: Option<String>,
        /// Grant an action: `name` or `name=value` (repeatable)
        #[arg(long = "action")]
        actions: Vec<String>,
        /// Revoke a granted action (repeatable)
        #[arg(long = "revoke")]
        revoke: Vec<String>,
        /// Activate or deactivate the policy
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a policy
    Delete { name: String },

    /// Activate a policy
    Enable { name: String },

    /// Deactivate a policy
    Disable { name: String },
}
