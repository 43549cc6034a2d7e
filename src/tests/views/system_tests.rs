use super::*;
use crate::fake_api::FakeApi;

#[test]
fn checkbox_settings_decode_before_snapshot() {
    let api = FakeApi::sample();
    let view = SystemSettings::load(&api).expect("load");

    assert_eq!(view.form.get("PrependPin"), Some(&ConfigValue::Bool(true)));
    assert_eq!(view.form.get("splitAtSign"), Some(&ConfigValue::Bool(true)));
    assert_eq!(view.form.get("AutoResync"), Some(&ConfigValue::Bool(false)));
    // Absent checkbox settings start unchecked.
    assert_eq!(
        view.form.get("UiLoginDisplayRealmBox"),
        Some(&ConfigValue::Bool(false))
    );
    assert!(!view.form.is_dirty());
}

#[test]
fn edits_keep_value_types_and_save_only_changes() {
    let api = FakeApi::sample();
    let mut view = SystemSettings::load(&api).expect("load");
    view.set("AutoResync", "true").expect("bool");
    view.set("DefaultMaxFailCount", "10").expect("unchanged text");
    assert!(view.set("PrependPin", "maybe").is_err());

    let (sent, _) = view.save(&api).expect("save").expect("changes");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent.get("AutoResync"), Some(&ConfigValue::Bool(true)));
}

#[test]
fn decode_checked_accepts_all_set_spellings() {
    assert!(decode_checked(&ConfigValue::Bool(true)));
    assert!(decode_checked(&ConfigValue::Int(1)));
    assert!(decode_checked(&ConfigValue::text("1")));
    assert!(decode_checked(&ConfigValue::text("True")));
    assert!(!decode_checked(&ConfigValue::text("true ")));
    assert!(!decode_checked(&ConfigValue::text("0")));
    assert!(!decode_checked(&ConfigValue::Int(2)));
}
