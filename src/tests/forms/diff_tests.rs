use std::collections::BTreeMap;

use super::*;
use crate::fake_api::FakeApi;

fn map(entries: &[(&str, ConfigValue)]) -> ConfigMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn save_payload_contains_only_changed_entries() {
    let mut form = DiffForm::from_snapshot(map(&[
        ("a", ConfigValue::Int(1)),
        ("b", ConfigValue::Int(2)),
    ]));
    form.set("b", ConfigValue::Int(3));

    assert_eq!(form.changed(), map(&[("b", ConfigValue::Int(3))]));
    assert!(form.is_dirty());
}

#[test]
fn equality_is_type_aware() {
    let mut form = DiffForm::from_snapshot(map(&[("totp.timeStep", ConfigValue::text("30"))]));
    form.set("totp.timeStep", ConfigValue::Int(30));
    assert_eq!(
        form.changed(),
        map(&[("totp.timeStep", ConfigValue::Int(30))])
    );
}

#[test]
fn new_keys_count_as_changes() {
    let mut form = DiffForm::from_snapshot(BTreeMap::new());
    form.set("sms.Provider", ConfigValue::text("x"));
    assert_eq!(form.changed().len(), 1);
}

#[test]
fn unchanged_form_makes_no_request() {
    let api = FakeApi::sample();
    let form = DiffForm::load(&api).expect("load");
    assert!(form.save(&api).expect("save").is_none());
    assert_eq!(api.calls(), vec!["get_system_config"]);
}

#[test]
fn save_sends_diff_and_keeps_snapshot_until_rebase() {
    let api = FakeApi::sample();
    let mut form = DiffForm::load(&api).expect("load");
    form.set("DefaultMaxFailCount", ConfigValue::text("20"));

    let (sent, _) = form.save(&api).expect("save").expect("something to save");
    assert_eq!(
        sent,
        map(&[("DefaultMaxFailCount", ConfigValue::text("20"))])
    );

    // The snapshot still reflects the load, so a second save resends.
    assert_eq!(form.changed(), sent);

    form.rebase();
    assert!(form.changed().is_empty());
    assert_eq!(api.state().saved_config.len(), 1);
}

#[test]
fn set_default_fills_missing_and_empty_only() {
    let mut form = DiffForm::from_snapshot(map(&[
        ("hotp.hashlib", ConfigValue::text("")),
        ("totp.hashlib", ConfigValue::text("sha256")),
    ]));
    form.set_default("hotp.hashlib", ConfigValue::text("sha1"));
    form.set_default("totp.hashlib", ConfigValue::text("sha1"));
    form.set_default("totp.timeStep", ConfigValue::text("30"));

    assert_eq!(form.get("hotp.hashlib"), Some(&ConfigValue::text("sha1")));
    assert_eq!(form.get("totp.hashlib"), Some(&ConfigValue::text("sha256")));
    assert_eq!(form.get("totp.timeStep"), Some(&ConfigValue::text("30")));
    assert_eq!(form.original().len(), 2);
}
