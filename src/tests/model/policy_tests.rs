use super::*;

fn decode(v: serde_json::Value) -> Policy {
    serde_json::from_value(v).expect("decode policy")
}

#[test]
fn action_map_keeps_flags_and_values() {
    let p = decode(serde_json::json!({
        "name": "p",
        "scope": "enrollment",
        "action": {"autoassignment": true, "otp_pin_random": 0, "tokenlabel": "", "off": false}
    }));
    assert_eq!(p.action.get("autoassignment"), Some(&GrantedAction::Flag));
    assert_eq!(
        p.action.get("otp_pin_random"),
        Some(&GrantedAction::Value("0".to_string()))
    );
    assert!(!p.action.contains_key("tokenlabel"));
    assert!(!p.action.contains_key("off"));
    assert!(p.active);
}

#[test]
fn action_string_and_list_forms_decode_alike() {
    let from_string = decode(serde_json::json!({
        "name": "p", "scope": "admin", "action": "enable, otp_pin_random = 4"
    }));
    let from_list = decode(serde_json::json!({
        "name": "p", "scope": "admin", "action": ["enable", "otp_pin_random=4"]
    }));
    assert_eq!(from_string.action, from_list.action);
    assert_eq!(
        from_list.action.get("otp_pin_random"),
        Some(&GrantedAction::Value("4".to_string()))
    );
}

#[test]
fn conditions_accept_csv_or_lists() {
    let p = decode(serde_json::json!({
        "name": "p",
        "scope": "admin",
        "realm": "realm1, realm2",
        "user": ["alice", ""],
        "client": null,
        "active": false
    }));
    assert_eq!(p.realm, vec!["realm1".to_string(), "realm2".to_string()]);
    assert_eq!(p.user, vec!["alice".to_string()]);
    assert!(p.client.is_empty());
    assert!(!p.active);
}

#[test]
fn unknown_action_types_are_tolerated() {
    let def: ActionDef =
        serde_json::from_value(serde_json::json!({"type": "list", "desc": "x"})).expect("def");
    assert_eq!(def.kind, ActionType::Other);
    let def: ActionDef = serde_json::from_value(serde_json::json!({"desc": "y"})).expect("def");
    assert_eq!(def.kind, ActionType::Bool);
}
