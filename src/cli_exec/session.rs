use piadmin::model::ConnectionConfig;

use super::*;

pub(super) fn handle_login_command(
    overrides: &Overrides,
    username: String,
    password: String,
) -> Result<()> {
    let store = open_store()?;
    let stored = store.read_config()?.connection;
    let base_url = overrides
        .url
        .clone()
        .or_else(|| stored.map(|c| c.base_url))
        .context("no server configured (pass --url)")?;
    let base_url = base_url.trim_end_matches('/').to_string();

    let anonymous = RemoteClient::new(&ConnectionConfig {
        base_url: base_url.clone(),
        username: None,
        token: None,
    })?;
    let token = anonymous.login(&username, &password)?;

    store.set_connection(ConnectionConfig {
        base_url: base_url.clone(),
        username: Some(username.clone()),
        token: Some(token),
    })?;
    println!("Logged in to {} as {}", base_url, username);
    Ok(())
}

pub(super) fn handle_logout_command() -> Result<()> {
    let store = open_store()?;
    if store.clear_token()? {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}
