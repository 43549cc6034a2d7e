use super::policy::handle_policy_command;
use super::realm::handle_realm_command;
use super::resolver::handle_resolver_command;
use super::session::{handle_login_command, handle_logout_command};
use super::settings::{handle_system_command, handle_token_config_command};
use super::*;

pub(super) fn handle_command(command: Commands, overrides: &Overrides) -> Result<()> {
    match command {
        Commands::Login(args) => handle_login_command(overrides, args.username, args.password)?,
        Commands::Logout => handle_logout_command()?,
        Commands::Policy { command } => {
            with_client(overrides, |api| handle_policy_command(api, command))?
        }
        Commands::Realm { command } => {
            with_client(overrides, |api| handle_realm_command(api, command))?
        }
        Commands::Resolver { command } => {
            with_client(overrides, |api| handle_resolver_command(api, command))?
        }
        Commands::System { command } => {
            with_client(overrides, |api| handle_system_command(api, command))?
        }
        Commands::TokenConfig { command } => {
            with_client(overrides, |api| handle_token_config_command(api, command))?
        }
    }

    Ok(())
}

fn with_client<F>(overrides: &Overrides, f: F) -> Result<()>
where
    F: FnOnce(&dyn ConfigApi) -> Result<()>,
{
    let store = open_store()?;
    let client: RemoteClient = connect(&store, overrides)?;
    f(&client).with_context(|| format!("server {}", client.base_url()))
}
