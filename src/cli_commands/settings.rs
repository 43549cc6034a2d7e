use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SystemCommands {
    /// Show system settings
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Change settings (`KEY=VALUE`, repeatable); only changed keys are sent
    Set {
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum TokenConfigCommands {
    /// Show the settings of one token type
    Show {
        /// Token type (hotp, totp, sms, radius, ...)
        #[arg(long = "type", default_value = "hotp")]
        token_type: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Change token settings (`KEY=VALUE`, repeatable)
    Set {
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },
}
