use anyhow::{Context, Result};

use piadmin::remote::{ConfigApi, RemoteClient};

use crate::{
    Commands, Overrides, PolicyCommands, RealmCommands, ResolverCommands, SystemCommands,
    TokenConfigCommands, connect, open_store, print_json,
};

mod dispatch;
mod policy;
mod realm;
mod resolver;
mod session;
mod settings;

pub(super) fn handle_command(command: Commands, overrides: &Overrides) -> Result<()> {
    dispatch::handle_command(command, overrides)
}
