use actionbus_core::EntityOp;
use actionbus_events::{EntityAction, format_action_type_name};
use proptest::prelude::*;
use serde_json::Value;

fn any_op() -> impl Strategy<Value = EntityOp> {
    prop_oneof![
        prop::sample::select(EntityOp::BUILT_IN.to_vec()),
        "[A-Z][A-Z_]{0,15}".prop_map(|name| EntityOp::custom(name).unwrap()),
    ]
}

#[test]
fn label_has_the_documented_shape() {
    assert_eq!(format_action_type_name(&EntityOp::QueryAll, "Hero"), "QUERY_ALL [HERO]");
    assert_eq!(
        format_action_type_name(&EntityOp::SaveDeleteSuccess, "sideKick"),
        "SAVE_DELETE_SUCCESS [SIDEKICK]"
    );
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: an action's label is exactly the formatted label of its op and entity name.
    #[test]
    fn label_matches_format_action_type_name(op in any_op(), name in "[A-Za-z][A-Za-z0-9]{0,15}") {
        let expected = format_action_type_name(&op, &name);
        let action = EntityAction::<Value>::new(name.clone(), op.clone(), None).unwrap();
        prop_assert_eq!(action.action_type(), expected.as_str());
        prop_assert_eq!(expected, format!("{} [{}]", op.as_str(), name.to_uppercase()));
    }

    /// Property: cloning keeps the entity name and relabels with the new op.
    #[test]
    fn cloned_label_follows_new_op(from in any_op(), to in any_op(), name in "[A-Za-z]{1,12}") {
        let source = EntityAction::new(name.clone(), from, Some(Value::from(1))).unwrap();
        let forwarded = EntityAction::from_action(&source, to.clone());
        let suppressed = EntityAction::from_action_with(&source, to.clone(), None);
        let expected = format_action_type_name(&to, &name);

        prop_assert_eq!(forwarded.action_type(), expected.as_str());
        prop_assert_eq!(forwarded.payload(), source.payload());
        prop_assert_eq!(suppressed.action_type(), forwarded.action_type());
        prop_assert_eq!(suppressed.payload(), None);
    }
}
