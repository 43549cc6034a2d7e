use piadmin::model::{ResolverKind, ResolverTestResult};
use piadmin::views::ResolversView;
use piadmin::views::resolver_forms::{
    AUTH_TYPES, LdapParams, LdapPreset, PasswdParams, ResolverForm, SqlParams, SqlPreset,
};

use crate::cli_commands::resolver::{LdapArgs, SaveFlags, SqlArgs};

use super::*;

pub(super) fn handle_resolver_command(
    api: &dyn ConfigApi,
    command: ResolverCommands,
) -> Result<()> {
    let mut view = ResolversView::load(api)?;

    match command {
        ResolverCommands::List { json } => {
            if json {
                print_json(&view.resolvers, "resolvers")?;
            } else {
                for (name, r) in &view.resolvers {
                    println!("{} {}", name, r.kind);
                }
            }
        }
        ResolverCommands::Show { name, json } => {
            let params = match view.edit_kind(&name)? {
                ResolverKind::Passwd => PasswdParams::load(api, &name)?.to_params()?,
                ResolverKind::Ldap => LdapParams::load(api, &name)?.to_params()?,
                ResolverKind::Sql => SqlParams::load(api, &name)?.to_params()?,
            };
            if json {
                print_json(&params, "resolver")?;
            } else {
                println!("name: {}", name);
                for (k, v) in &params {
                    println!("{}: {}", k, display_param(v));
                }
            }
        }
        ResolverCommands::Delete { name } => {
            if !view.resolvers.contains_key(&name) {
                anyhow::bail!("unknown resolver {:?}", name);
            }
            view.del_resolver(api, &name)?;
            println!("Deleted resolver {}", name);
        }
        ResolverCommands::Passwd(args) => {
            let mut form: PasswdParams = open_form(api, &view, &args.name)?;
            if let Some(file) = args.file {
                form.file_name = file;
            }
            finish(api, &form, &args.name, &args.flags)?;
        }
        ResolverCommands::Ldap(args) => {
            let mut form: LdapParams = open_form(api, &view, &args.name)?;
            apply_ldap_args(&mut form, &args)?;
            finish(api, &form, &args.name, &args.flags)?;
        }
        ResolverCommands::Sql(args) => {
            let mut form: SqlParams = open_form(api, &view, &args.name)?;
            apply_sql_args(&mut form, &args)?;
            finish(api, &form, &args.name, &args.flags)?;
        }
        ResolverCommands::Test { name } => {
            let result = match view.edit_kind(&name)? {
                ResolverKind::Passwd => PasswdParams::load(api, &name)?.test(api)?,
                ResolverKind::Ldap => LdapParams::load(api, &name)?.test(api)?,
                ResolverKind::Sql => SqlParams::load(api, &name)?.test(api)?,
            };
            report_test(&name, &result)?;
        }
    }

    Ok(())
}

/// Loads `name` when it exists, else starts from the new-resolver defaults.
fn open_form<F: ResolverForm>(
    api: &dyn ConfigApi,
    view: &ResolversView,
    name: &str,
) -> Result<F> {
    if view.resolvers.contains_key(name) {
        F::load(api, name)
    } else {
        Ok(F::default())
    }
}

fn finish<F: ResolverForm>(
    api: &dyn ConfigApi,
    form: &F,
    name: &str,
    flags: &SaveFlags,
) -> Result<()> {
    if flags.test {
        let result = form.test(api)?;
        return report_test(name, &result);
    }
    form.save(api, name)?;
    println!("Saved {} {}", F::KIND, name);
    Ok(())
}

fn report_test(name: &str, result: &ResolverTestResult) -> Result<()> {
    if result.ok {
        println!("{}: ok {}", name, result.description);
        Ok(())
    } else {
        anyhow::bail!("{}: test failed: {}", name, result.description)
    }
}

fn apply_ldap_args(form: &mut LdapParams, args: &LdapArgs) -> Result<()> {
    if let Some(preset) = args.preset.as_deref() {
        form.apply_preset(preset.parse::<LdapPreset>()?);
    }
    set_text(&mut form.ldap_uri, &args.uri);
    set_text(&mut form.ldap_base, &args.base);
    set_text(&mut form.bind_dn, &args.bind_dn);
    set_text(&mut form.bind_pw, &args.bind_pw);
    set_text(&mut form.login_name_attribute, &args.login_attribute);
    set_text(&mut form.search_filter, &args.search_filter);
    set_text(&mut form.user_filter, &args.user_filter);
    set_text(&mut form.user_info, &args.user_info);
    set_text(&mut form.ca_certificate, &args.ca_certificate);
    set_text(&mut form.uid_type, &args.uid_type);
    set_text(&mut form.auth_type, &args.auth_type);
    if args.size_limit.is_some() {
        form.size_limit = args.size_limit;
    }
    if args.timeout.is_some() {
        form.timeout = args.timeout;
    }
    if let Some(on) = args.no_referrals {
        form.no_referrals = on;
    }
    if !AUTH_TYPES.contains(&form.auth_type.as_str()) {
        anyhow::bail!("unsupported LDAP auth type {:?}", form.auth_type);
    }
    Ok(())
}

fn apply_sql_args(form: &mut SqlParams, args: &SqlArgs) -> Result<()> {
    if let Some(preset) = args.preset.as_deref() {
        form.apply_preset(preset.parse::<SqlPreset>()?);
    }
    set_text(&mut form.driver, &args.driver);
    set_text(&mut form.server, &args.server);
    set_text(&mut form.database, &args.database);
    set_text(&mut form.user, &args.user);
    set_text(&mut form.password, &args.password);
    set_text(&mut form.table, &args.table);
    set_text(&mut form.map, &args.map);
    set_text(&mut form.where_clause, &args.where_clause);
    set_text(&mut form.encoding, &args.encoding);
    if args.port.is_some() {
        form.port = args.port;
    }
    if args.limit.is_some() {
        form.limit = args.limit;
    }
    Ok(())
}

fn set_text(field: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        field.clone_from(v);
    }
}

fn display_param(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
