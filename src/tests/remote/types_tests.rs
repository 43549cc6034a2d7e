use super::*;

use crate::model::Policy;

#[test]
fn failure_envelope_without_value_becomes_server_error() {
    let env: Envelope<Vec<Policy>> = serde_json::from_value(serde_json::json!({
        "result": {"status": false, "error": {"code": 905, "message": "Unknown scope"}},
        "version": "3.9"
    }))
    .expect("parse envelope");

    match env.into_value("list policies") {
        Err(ApiError::Server {
            label,
            code,
            message,
        }) => {
            assert_eq!(label, "list policies");
            assert_eq!(code, 905);
            assert_eq!(message, "Unknown scope");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn successful_envelope_without_value_is_missing_value() {
    let env: Envelope<crate::model::Realms> =
        serde_json::from_value(serde_json::json!({"result": {"status": true}}))
            .expect("parse envelope");
    assert!(matches!(
        env.into_value("list realms"),
        Err(ApiError::MissingValue { .. })
    ));
}

#[test]
fn envelope_detail_is_returned_with_value() {
    let env: Envelope<bool> = serde_json::from_value(serde_json::json!({
        "result": {"status": true, "value": false},
        "detail": {"description": "Can't contact LDAP server"}
    }))
    .expect("parse envelope");
    let (ok, detail) = env.into_value_and_detail("test resolver").expect("value");
    assert!(!ok);
    assert_eq!(detail.description.as_deref(), Some("Can't contact LDAP server"));
}
