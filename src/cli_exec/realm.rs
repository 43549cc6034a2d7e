use piadmin::views::RealmsView;

use super::*;

pub(super) fn handle_realm_command(api: &dyn ConfigApi, command: RealmCommands) -> Result<()> {
    let mut view = RealmsView::load(api)?;

    match command {
        RealmCommands::List { json } => {
            if json {
                print_json(&view.realms, "realms")?;
            } else {
                for (name, realm) in &view.realms {
                    let resolvers = realm
                        .resolver
                        .iter()
                        .map(|r| r.name.as_str())
                        .collect::<Vec<_>>()
                        .join(",");
                    let default = if realm.default { " (default)" } else { "" };
                    println!("{}{} {}", name, default, resolvers);
                }
            }
        }
        RealmCommands::Set { name, resolvers } => {
            view.start_edit(&name);
            let current = view.selected_resolvers.keys().cloned().collect::<Vec<_>>();
            for r in current {
                view.selected_resolvers.insert(r, false);
            }
            for r in &resolvers {
                view.select_resolver(r, true)?;
            }
            view.set_realm(api, &name)?;
            println!("Saved realm {} with resolvers {}", name, resolvers.join(","));
        }
        RealmCommands::Delete { name } => {
            if !view.realms.contains_key(&name) {
                anyhow::bail!("unknown realm {:?}", name);
            }
            view.del_realm(api, &name)?;
            println!("Deleted realm {}", name);
        }
        RealmCommands::Default { name } => {
            if !view.realms.contains_key(&name) {
                anyhow::bail!("unknown realm {:?}", name);
            }
            view.set_default_realm(api, &name)?;
            println!("Default realm is now {}", name);
        }
        RealmCommands::ClearDefault => {
            view.clear_default_realm(api)?;
            println!("Default realm cleared");
        }
    }

    Ok(())
}
