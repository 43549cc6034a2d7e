use super::*;
use crate::fake_api::FakeApi;

#[test]
fn edit_kind_picks_the_sub_form_by_type() {
    let api = FakeApi::sample();
    let view = ResolversView::load(&api).expect("load");
    assert_eq!(view.edit_kind("reso1").expect("passwd"), ResolverKind::Passwd);
    assert_eq!(view.edit_kind("ldap1").expect("ldap"), ResolverKind::Ldap);
    assert_eq!(view.edit_kind("sql1").expect("sql"), ResolverKind::Sql);
    assert!(view.edit_kind("ghost").is_err());
}

#[test]
fn unsupported_types_cannot_be_edited() {
    let api = FakeApi::sample();
    api.state().resolvers.insert(
        "scim1".to_string(),
        crate::model::ResolverRecord {
            resolvername: "scim1".to_string(),
            kind: "scimresolver".to_string(),
            data: serde_json::Map::new(),
        },
    );
    let view = ResolversView::load(&api).expect("load");
    let err = view.edit_kind("scim1").expect_err("scim");
    assert!(err.to_string().contains("scimresolver"));
}

#[test]
fn delete_refreshes_the_list() {
    let api = FakeApi::sample();
    let mut view = ResolversView::load(&api).expect("load");
    view.del_resolver(&api, "sql1").expect("delete");
    assert!(!view.resolvers.contains_key("sql1"));
    assert_eq!(view.last_result, Some(serde_json::json!(1)));
    assert_eq!(
        api.calls(),
        vec!["get_resolvers", "del_resolver sql1", "get_resolvers"]
    );
}
