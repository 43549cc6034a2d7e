use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum RealmCommands {
    /// List realms and their resolvers
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a realm or replace its resolvers
    Set {
        name: String,
        /// Resolver to include (repeatable)
        #[arg(long = "resolver", required = true)]
        resolvers: Vec<String>,
    },

    /// Delete a realm
    Delete { name: String },

    /// Make a realm the default realm
    Default { name: String },

    /// Unset the default realm
    ClearDefault,
}
