use piadmin::remote::{Ack, ConfigMap};
use piadmin::views::{SystemSettings, TokenConfig};

use crate::parse_assignment;

use super::*;

pub(super) fn handle_system_command(api: &dyn ConfigApi, command: SystemCommands) -> Result<()> {
    let mut view = SystemSettings::load(api)?;

    match command {
        SystemCommands::Show { json } => {
            if json {
                print_json(view.form.live(), "system settings")?;
            } else {
                print_settings(view.form.live());
            }
        }
        SystemCommands::Set { assignments } => {
            for raw in &assignments {
                let (key, value) = parse_assignment(raw)?;
                view.set(&key, &value)
                    .with_context(|| format!("system setting {}", key))?;
            }
            report_saved(view.save(api)?);
        }
    }

    Ok(())
}

pub(super) fn handle_token_config_command(
    api: &dyn ConfigApi,
    command: TokenConfigCommands,
) -> Result<()> {
    match command {
        TokenConfigCommands::Show { token_type, json } => {
            let view = TokenConfig::load(api, Some(&token_type))?;
            let settings = view.type_settings();
            if json {
                print_json(
                    &serde_json::json!({
                        "type": view.token_type,
                        "settings": settings,
                        "options": view.options,
                    }),
                    "token config",
                )?;
            } else {
                print_settings(&settings);
            }
        }
        TokenConfigCommands::Set { assignments } => {
            let mut view = TokenConfig::load(api, None)?;
            for raw in &assignments {
                let (key, value) = parse_assignment(raw)?;
                view.set(&key, &value)
                    .with_context(|| format!("token setting {}", key))?;
            }
            report_saved(view.save(api)?);
        }
    }

    Ok(())
}

fn print_settings(settings: &ConfigMap) {
    for (k, v) in settings {
        println!("{}: {}", k, v);
    }
}

fn report_saved(saved: Option<(ConfigMap, Ack)>) {
    match saved {
        None => println!("No changes"),
        Some((sent, _)) => {
            let keys = sent.keys().map(String::as_str).collect::<Vec<_>>();
            println!("Updated {}", keys.join(", "));
        }
    }
}
