use clap::Args;

/// The server URL comes from the global `--url` flag or the stored connection.
#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long, short = 'u')]
    pub(crate) username: String,
    /// Password (read from PIADMIN_PASSWORD when omitted)
    #[arg(long, env = "PIADMIN_PASSWORD", hide_env_values = true)]
    pub(crate) password: String,
}
