use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum ResolverCommands {
    /// List resolvers
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the parameters of a resolver
    Show {
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a resolver
    Delete { name: String },

    /// Create or update a flat-file resolver
    Passwd(PasswdArgs),

    /// Create or update an LDAP resolver
    Ldap(LdapArgs),

    /// Create or update an SQL resolver
    Sql(SqlArgs),

    /// Test the connection of a stored resolver
    Test { name: String },
}

#[derive(Args)]
pub(crate) struct SaveFlags {
    /// Test the connection instead of saving
    #[arg(long)]
    pub(crate) test: bool,
}

#[derive(Args)]
pub(crate) struct PasswdArgs {
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) file: Option<String>,
    #[command(flatten)]
    pub(crate) flags: SaveFlags,
}

#[derive(Args)]
pub(crate) struct LdapArgs {
    pub(crate) name: String,
    /// Attribute preset: ad|openldap (applied before the other flags)
    #[arg(long)]
    pub(crate) preset: Option<String>,
    #[arg(long)]
    pub(crate) uri: Option<String>,
    #[arg(long)]
    pub(crate) base: Option<String>,
    #[arg(long)]
    pub(crate) bind_dn: Option<String>,
    #[arg(long)]
    pub(crate) bind_pw: Option<String>,
    #[arg(long)]
    pub(crate) login_attribute: Option<String>,
    #[arg(long)]
    pub(crate) search_filter: Option<String>,
    #[arg(long)]
    pub(crate) user_filter: Option<String>,
    /// JSON attribute mapping
    #[arg(long)]
    pub(crate) user_info: Option<String>,
    #[arg(long)]
    pub(crate) size_limit: Option<u32>,
    #[arg(long)]
    pub(crate) timeout: Option<u32>,
    #[arg(long)]
    pub(crate) no_referrals: Option<bool>,
    #[arg(long)]
    pub(crate) ca_certificate: Option<String>,
    #[arg(long)]
    pub(crate) uid_type: Option<String>,
    /// Simple|"SASL Digest-MD5"
    #[arg(long)]
    pub(crate) auth_type: Option<String>,
    #[command(flatten)]
    pub(crate) flags: SaveFlags,
}

#[derive(Args)]
pub(crate) struct SqlArgs {
    pub(crate) name: String,
    /// Table preset: wordpress|otrs|tine|owncloud (applied before the other flags)
    #[arg(long)]
    pub(crate) preset: Option<String>,
    #[arg(long)]
    pub(crate) driver: Option<String>,
    #[arg(long)]
    pub(crate) server: Option<String>,
    #[arg(long)]
    pub(crate) port: Option<u32>,
    #[arg(long)]
    pub(crate) database: Option<String>,
    #[arg(long)]
    pub(crate) user: Option<String>,
    #[arg(long)]
    pub(crate) password: Option<String>,
    #[arg(long)]
    pub(crate) table: Option<String>,
    /// JSON column mapping
    #[arg(long)]
    pub(crate) map: Option<String>,
    #[arg(long = "where")]
    pub(crate) where_clause: Option<String>,
    #[arg(long)]
    pub(crate) encoding: Option<String>,
    #[arg(long)]
    pub(crate) limit: Option<u32>,
    #[command(flatten)]
    pub(crate) flags: SaveFlags,
}
