use std::collections::BTreeSet;

use super::*;
use crate::model::ActionDef;

fn def(kind: ActionType) -> ActionDef {
    ActionDef {
        desc: format!("{} action", kind.as_str()),
        kind,
        allowed_values: None,
        group: None,
    }
}

fn schema(entries: &[(&str, ActionType)]) -> ScopeSchema {
    entries
        .iter()
        .map(|(name, kind)| (name.to_string(), def(*kind)))
        .collect()
}

fn granted(entries: &[(&str, Option<&str>)]) -> GrantedActions {
    entries
        .iter()
        .map(|(name, value)| {
            let g = match value {
                Some(v) => GrantedAction::Value(v.to_string()),
                None => GrantedAction::Flag,
            };
            (name.to_string(), g)
        })
        .collect()
}

fn as_set(list: Vec<String>) -> BTreeSet<String> {
    list.into_iter().collect()
}

#[test]
fn all_bool_schema_is_boolean_mode() {
    let s = schema(&[("enable", ActionType::Bool), ("disable", ActionType::Bool)]);
    let form = ActionForm::materialize(&s, &granted(&[("enable", None)]));
    let ActionForm::Boolean(set) = &form else {
        panic!("expected boolean form, got {:?}", form);
    };
    assert_eq!(
        set.actions,
        vec![
            BooleanAction {
                name: "disable".to_string(),
                help: "bool action".to_string(),
                ticked: false,
            },
            BooleanAction {
                name: "enable".to_string(),
                help: "bool action".to_string(),
                ticked: true,
            },
        ]
    );
    assert_eq!(form.to_action_list(), vec!["enable".to_string()]);
}

#[test]
fn one_typed_action_switches_whole_scope_to_valued_mode() {
    let s = schema(&[
        ("enable", ActionType::Bool),
        ("tokenlabel", ActionType::Str),
    ]);
    let form = ActionForm::materialize(&s, &GrantedActions::new());
    assert!(form.is_valued());
    assert_eq!(form.names(), vec!["enable", "tokenlabel"]);
    assert!(form.to_action_list().is_empty());
}

#[test]
fn unknown_declared_type_forces_valued_mode() {
    let s: ScopeSchema = serde_json::from_value(serde_json::json!({
        "a": {"type": "bool", "desc": ""},
        "b": {"type": "list", "desc": ""}
    }))
    .expect("parse schema");
    assert_eq!(s["b"].kind, ActionType::Other);
    assert!(ActionForm::materialize(&s, &GrantedActions::new()).is_valued());
}

#[test]
fn unknown_declared_type_keeps_its_granted_value() {
    let s: ScopeSchema = serde_json::from_value(serde_json::json!({
        "a": {"type": "bool", "desc": ""},
        "b": {"type": "list", "desc": ""}
    }))
    .expect("parse schema");
    let g = granted(&[("a", None), ("b", Some("x,y"))]);

    let mut form = ActionForm::materialize(&s, &g);
    assert_eq!(
        form.to_action_list(),
        vec!["a".to_string(), "b=x,y".to_string()]
    );

    form.set_value("b", "z").expect("set");
    assert_eq!(
        form.to_action_list(),
        vec!["a".to_string(), "b=z".to_string()]
    );
}

#[test]
fn valued_round_trip_reproduces_granted_actions() {
    let s = schema(&[
        ("autoassignment", ActionType::Bool),
        ("otp_pin_random", ActionType::Int),
        ("tokenlabel", ActionType::Str),
        ("unused", ActionType::Str),
    ]);
    let g = granted(&[
        ("autoassignment", None),
        ("otp_pin_random", Some("8")),
        ("tokenlabel", Some("<u>@<r>")),
    ]);
    let form = ActionForm::materialize(&s, &g);
    assert_eq!(
        as_set(form.to_action_list()),
        as_set(vec![
            "autoassignment".to_string(),
            "otp_pin_random=8".to_string(),
            "tokenlabel=<u>@<r>".to_string(),
        ])
    );
}

#[test]
fn boolean_round_trip_reproduces_granted_actions() {
    let s = schema(&[
        ("enable", ActionType::Bool),
        ("disable", ActionType::Bool),
        ("delete", ActionType::Bool),
    ]);
    let g = granted(&[("enable", None), ("delete", None)]);
    let form = ActionForm::materialize(&s, &g);
    assert_eq!(
        as_set(form.to_action_list()),
        as_set(vec!["delete".to_string(), "enable".to_string()])
    );
}

#[test]
fn integer_zero_is_serialized_not_dropped() {
    let s = schema(&[("otp_pin_random", ActionType::Int)]);
    let form = ActionForm::materialize(&s, &granted(&[("otp_pin_random", Some("0"))]));
    let ActionForm::Valued(set) = &form else {
        panic!("expected valued form");
    };
    assert_eq!(set.numbers.get("otp_pin_random"), Some(&0));
    assert_eq!(form.to_action_list(), vec!["otp_pin_random=0".to_string()]);
}

#[test]
fn zero_entered_by_admin_is_serialized() {
    let s = schema(&[("lostTokenPWLen", ActionType::Int)]);
    let mut form = ActionForm::materialize(&s, &GrantedActions::new());
    form.apply("lostTokenPWLen=0").expect("apply");
    assert_eq!(form.to_action_list(), vec!["lostTokenPWLen=0".to_string()]);
}

#[test]
fn string_value_wins_over_number_value() {
    let s = schema(&[("x", ActionType::Int)]);
    let mut form = ActionForm::materialize(&s, &granted(&[("x", Some("5"))]));
    if let ActionForm::Valued(set) = &mut form {
        set.strings.insert("x".to_string(), "abc".to_string());
    }
    assert_eq!(form.to_action_list(), vec!["x=abc".to_string()]);
}

#[test]
fn empty_string_value_falls_back_to_bare_name() {
    let s = schema(&[("tokenlabel", ActionType::Str)]);
    let mut form = ActionForm::materialize(&s, &GrantedActions::new());
    form.set_value("tokenlabel", "").expect("set");
    assert_eq!(form.to_action_list(), vec!["tokenlabel".to_string()]);
}

#[test]
fn int_preset_reads_leading_digits_and_skips_garbage() {
    let s = schema(&[("a", ActionType::Int), ("b", ActionType::Int)]);
    let form = ActionForm::materialize(&s, &granted(&[("a", Some("12px")), ("b", Some("many"))]));
    let ActionForm::Valued(set) = &form else {
        panic!("expected valued form");
    };
    assert_eq!(set.numbers.get("a"), Some(&12));
    assert_eq!(set.numbers.get("b"), None);
    assert_eq!(
        form.to_action_list(),
        vec!["a=12".to_string(), "b".to_string()]
    );
}

#[test]
fn unticked_actions_are_omitted_even_with_values() {
    let s = schema(&[("tokenlabel", ActionType::Str)]);
    let mut form = ActionForm::materialize(&s, &granted(&[("tokenlabel", Some("x"))]));
    form.tick("tokenlabel", false).expect("untick");
    assert!(form.to_action_list().is_empty());
}

#[test]
fn edits_reject_names_outside_the_scope() {
    let s = schema(&[("enable", ActionType::Bool)]);
    let mut form = ActionForm::materialize(&s, &GrantedActions::new());
    assert!(form.tick("reset", true).is_err());
    assert!(form.apply("enable=1").is_err());
}

#[test]
fn typed_setters_validate_input() {
    let s = schema(&[
        ("flag", ActionType::Bool),
        ("len", ActionType::Int),
    ]);
    let mut form = ActionForm::materialize(&s, &GrantedActions::new());
    assert!(form.set_value("flag", "x").is_err());
    assert!(form.set_value("len", "ten").is_err());
    form.set_value("len", "10").expect("set len");
    form.tick("flag", true).expect("tick flag");
    assert_eq!(
        form.to_action_list(),
        vec!["flag".to_string(), "len=10".to_string()]
    );

    form.clear_value("len").expect("clear");
    assert_eq!(
        form.to_action_list(),
        vec!["flag".to_string(), "len".to_string()]
    );
}

#[test]
fn parse_action_value_splits_on_first_equals() {
    assert_eq!(parse_action_value("a"), ("a", None));
    assert_eq!(parse_action_value(" a = b=c "), ("a", Some("b=c")));
}
