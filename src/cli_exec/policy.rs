use piadmin::forms::ticked_names;
use piadmin::views::{PolicyDetails, PolicyList};

use super::*;

pub(super) fn handle_policy_command(api: &dyn ConfigApi, command: PolicyCommands) -> Result<()> {
    match command {
        PolicyCommands::List { json } => {
            let list = PolicyList::load(api)?;
            if json {
                print_json(&list.policies, "policies")?;
            } else {
                for p in &list.policies {
                    let state = if p.active { "active" } else { "inactive" };
                    println!("{} {} {}", p.name, p.scope, state);
                }
            }
        }
        PolicyCommands::Show { name, json } => {
            let view = PolicyDetails::open(api, Some(&name), None)?;
            let params = view.build_params()?;
            if json {
                print_json(
                    &serde_json::json!({
                        "name": name,
                        "params": params,
                        "actions": view.actions,
                    }),
                    "policy",
                )?;
            } else {
                println!("name: {}", name);
                println!("scope: {}", params.scope);
                println!("active: {}", params.active);
                println!("realm: {}", params.realm.join(","));
                println!("resolver: {}", params.resolver.join(","));
                println!("user: {}", params.user);
                println!("client: {}", params.client);
                println!("action:");
                for a in params.action {
                    println!("  {}", a);
                }
            }
        }
        PolicyCommands::Defs { scope, json } => {
            let mut defs = api.get_policy_defs()?;
            if let Some(scope) = scope.as_deref() {
                defs.retain(|s, _| s == scope);
                if defs.is_empty() {
                    anyhow::bail!("unknown policy scope {:?}", scope);
                }
            }
            if json {
                print_json(&defs, "policy defs")?;
            } else {
                for (scope, actions) in &defs {
                    println!("{}:", scope);
                    for (name, def) in actions {
                        println!("  {} ({}) {}", name, def.kind.as_str(), def.desc);
                    }
                }
            }
        }
        PolicyCommands::Set {
            name,
            scope,
            realms,
            resolvers,
            user,
            client,
            actions,
            revoke,
            active,
        } => {
            let list = PolicyList::load(api)?;
            let mut view = if list.find(&name).is_some() {
                PolicyDetails::open(api, Some(&name), Some(&list.policies))?
            } else {
                let mut view = PolicyDetails::open(api, None, None)?;
                view.policy_name = name.clone();
                view
            };

            if let Some(scope) = scope.as_deref() {
                if view.selected_scope() != Some(scope) {
                    view.select_scope(scope)?;
                }
            }
            if !realms.is_empty() {
                view.select_realms(&realms)?;
            }
            if !resolvers.is_empty() {
                view.select_resolvers(&resolvers)?;
            }
            if let Some(user) = user.as_deref() {
                view.set_user(user);
            }
            if let Some(client) = client.as_deref() {
                view.set_client(client);
            }
            if !actions.is_empty() || !revoke.is_empty() {
                let form = view.actions_mut()?;
                for entry in &actions {
                    form.apply(entry)?;
                }
                for entry in &revoke {
                    form.tick(entry, false)?;
                    form.clear_value(entry)?;
                }
            }
            if let Some(active) = active {
                view.params.active = active;
            }

            let verb = if view.existing().is_some() {
                "Updated"
            } else {
                "Created"
            };
            view.create_policy(api)?;
            println!(
                "{} policy {} (scope {}, realms [{}])",
                verb,
                view.policy_name,
                view.params.scope,
                ticked_names(&view.realms).join(",")
            );
        }
        PolicyCommands::Delete { name } => {
            let mut list = PolicyList::load(api)?;
            if list.find(&name).is_none() {
                anyhow::bail!("unknown policy {:?}", name);
            }
            list.delete(api, &name)?;
            println!("Deleted policy {}", name);
        }
        PolicyCommands::Enable { name } => {
            PolicyList::load(api)?.set_active(api, &name, true)?;
            println!("Enabled policy {}", name);
        }
        PolicyCommands::Disable { name } => {
            PolicyList::load(api)?.set_active(api, &name, false)?;
            println!("Disabled policy {}", name);
        }
    }

    Ok(())
}
