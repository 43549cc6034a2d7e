use super::*;
use crate::fake_api::FakeApi;

#[test]
fn ldap_defaults_match_new_resolver_form() {
    let p = LdapParams::default();
    assert_eq!(p.size_limit, Some(500));
    assert_eq!(p.timeout, Some(5));
    assert_eq!(p.uid_type, "DN");
    assert_eq!(p.auth_type, "Simple");
    assert!(AUTH_TYPES.contains(&p.auth_type.as_str()));

    let params = p.to_params().expect("params");
    assert_eq!(params["type"], "ldapresolver");
    assert_eq!(params["SIZELIMIT"], 500);
    assert_eq!(params["NOREFERRALS"], "0");
}

#[test]
fn noreferrals_decodes_only_one_as_true() {
    let parse = |v: serde_json::Value| {
        let mut data = ResolverParams::new();
        data.insert("NOREFERRALS".to_string(), v);
        LdapParams::from_data(data).expect("parse").no_referrals
    };
    assert!(parse(serde_json::json!("1")));
    assert!(!parse(serde_json::json!("0")));
    assert!(!parse(serde_json::json!("True")));
    assert!(!LdapParams::from_data(ResolverParams::new()).expect("parse").no_referrals);
}

#[test]
fn loading_ldap_resolver_coerces_fields_and_keeps_unknown_ones() {
    let api = FakeApi::sample();
    let p = LdapParams::load(&api, "ldap1").expect("load");
    assert!(p.no_referrals);
    assert_eq!(p.size_limit, Some(200));
    assert_eq!(p.timeout, None);
    assert_eq!(p.ldap_uri, "ldap://dc.example.com");
    // Fields missing on the server fall back to the new-form defaults.
    assert_eq!(p.auth_type, "Simple");
    assert_eq!(p.extra["CACHE_TIMEOUT"], "120");

    p.save(&api, "ldap1").expect("save");
    let st = api.state();
    let (_, sent) = st.saved_resolvers.last().expect("saved");
    assert_eq!(sent["type"], "ldapresolver");
    assert_eq!(sent["NOREFERRALS"], "1");
    assert_eq!(sent["CACHE_TIMEOUT"], "120");
    assert!(!sent.contains_key("TIMEOUT"));
}

#[test]
fn active_directory_preset_sets_every_field_and_is_idempotent() {
    let mut p = LdapParams::default();
    p.ldap_uri = "ldaps://ad.example.com".to_string();
    p.apply_preset(LdapPreset::ActiveDirectory);
    let once = p.clone();
    p.apply_preset(LdapPreset::ActiveDirectory);
    assert_eq!(p, once);

    assert_eq!(p.login_name_attribute, "sAMAccountName");
    assert_eq!(p.search_filter, "(sAMAccountName=*)(objectClass=person)");
    assert_eq!(p.user_filter, "(&(sAMAccountName=%s)(objectClass=person))");
    let info: serde_json::Value = serde_json::from_str(&p.user_info).expect("userinfo json");
    assert_eq!(info["username"], "sAMAccountName");
    assert_eq!(info["givenname"], "givenName");
    assert!(p.no_referrals);
    assert_eq!(p.size_limit, Some(500));
    assert_eq!(p.uid_type, "DN");
    assert_eq!(p.auth_type, "SASL Digest-MD5");
    assert_eq!(p.ldap_uri, "ldaps://ad.example.com");
}

#[test]
fn openldap_preset_uses_entry_uuid() {
    let mut p = LdapParams::default();
    p.apply_preset(LdapPreset::OpenLdap);
    assert_eq!(p.login_name_attribute, "uid");
    assert_eq!(p.search_filter, "(uid=*)(objectClass=inetOrgPerson)");
    assert_eq!(p.user_filter, "(&(uid=%s)(objectClass=inetOrgPerson))");
    assert_eq!(p.uid_type, "entryUUID");
    assert_eq!(p.auth_type, "SASL Digest-MD5");
    assert!(p.no_referrals);
    assert_eq!("openldap".parse::<LdapPreset>().expect("parse"), LdapPreset::OpenLdap);
    assert!("novell".parse::<LdapPreset>().is_err());
}

#[test]
fn sql_presets_set_table_and_map() {
    for (preset, table) in [
        (SqlPreset::Wordpress, "wp_users"),
        (SqlPreset::Otrs, "users"),
        (SqlPreset::Tine, "tine20_accounts"),
        (SqlPreset::Owncloud, "oc_users"),
    ] {
        let mut p = SqlParams::default();
        p.apply_preset(preset);
        let once = p.clone();
        p.apply_preset(preset);
        assert_eq!(p, once);
        assert_eq!(p.table, table);
        let map: serde_json::Value = serde_json::from_str(&p.map).expect("map json");
        assert!(map.get("username").is_some());
        assert!(map.get("password").is_some());
    }
}

#[test]
fn passwd_resolver_loads_and_saves_file_name() {
    let api = FakeApi::sample();
    assert_eq!(PasswdParams::default().file_name, "/etc/passwd");

    let mut p = PasswdParams::load(&api, "reso1").expect("load");
    assert_eq!(p.file_name, "/etc/secrets");
    p.file_name = "/etc/passwd".to_string();
    p.save(&api, "reso1").expect("save");

    let st = api.state();
    let (name, sent) = st.saved_resolvers.last().expect("saved");
    assert_eq!(name, "reso1");
    assert_eq!(sent["type"], "passwdresolver");
    assert_eq!(sent["fileName"], "/etc/passwd");
}

#[test]
fn loading_with_the_wrong_form_is_rejected() {
    let api = FakeApi::sample();
    let err = SqlParams::load(&api, "ldap1").expect_err("type mismatch");
    assert!(err.to_string().contains("ldapresolver"));
    assert!(PasswdParams::load(&api, "missing").is_err());
}

#[test]
fn test_connection_sends_current_params() {
    let api = FakeApi::sample();
    let mut p = SqlParams::load(&api, "sql1").expect("load");
    assert_eq!(p.port, Some(3306));
    p.apply_preset(SqlPreset::Wordpress);

    let result = p.test(&api).expect("test");
    assert!(result.ok);
    assert_eq!(result.description, "Resolver definition is valid");

    let st = api.state();
    let sent = st.tested.last().expect("tested");
    assert_eq!(sent["type"], "sqlresolver");
    assert_eq!(sent["Table"], "wp_users");
    assert_eq!(sent["Driver"], "mysql");
}

#[test]
fn saving_requires_a_name() {
    let api = FakeApi::sample();
    assert!(PasswdParams::default().save(&api, " ").is_err());
    assert!(api.state().saved_resolvers.is_empty());
}
