use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use piadmin::model::ConnectionConfig;
use piadmin::remote::RemoteClient;
use piadmin::store::ConfigStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "piadmin")]
#[command(about = "Administration console for a privacyIDEA server", long_about = None)]
pub(crate) struct Cli {
    /// Server base URL (overrides the stored connection)
    #[arg(long, global = true)]
    pub(crate) url: Option<String>,

    /// Authorization token (overrides the stored token)
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Log request details to stderr (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Connection flags given on the command line.
#[derive(Clone, Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) url: Option<String>,
    pub(crate) token: Option<String>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let overrides = Overrides {
        url: cli.url,
        token: cli.token,
    };
    crate::cli_exec::handle_command(cli.command, &overrides)
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(fallback)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn open_store() -> Result<ConfigStore> {
    ConfigStore::discover()
}

/// Builds a client from the stored connection and the command-line overrides.
pub(crate) fn connect(store: &ConfigStore, overrides: &Overrides) -> Result<RemoteClient> {
    let stored = store.read_config()?.connection;
    let base_url = overrides
        .url
        .clone()
        .or_else(|| stored.as_ref().map(|c| c.base_url.clone()))
        .context("no server configured (run `piadmin login --url ...` or pass --url)")?;
    let token = overrides
        .token
        .clone()
        .or_else(|| stored.as_ref().and_then(|c| c.token.clone()))
        .context("not logged in (run `piadmin login` or pass --token)")?;
    RemoteClient::new(&ConnectionConfig {
        base_url,
        username: stored.and_then(|c| c.username),
        token: Some(token),
    })
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}

/// Splits a `KEY=VALUE` command-line assignment.
pub(crate) fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("expected KEY=VALUE, got {:?}", raw))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("empty key in {:?}", raw);
    }
    Ok((key.to_string(), value.to_string()))
}
