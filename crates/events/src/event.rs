use serde::{Deserialize, Serialize};

use crate::EntityAction;

/// Any event that is not an entity action (e.g. router or UI notifications).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>"))]
pub struct PlainAction<P = serde_json::Value> {
    #[serde(rename = "type")]
    action_type: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::envelope::present_payload"
    )]
    payload: Option<P>,
}

impl<P> PlainAction<P> {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

/// An event on the shared action bus.
///
/// The bus is heterogeneous: entity actions travel alongside unrelated events.
/// Every event is explicitly tagged, so filters dispatch on the variant and
/// never guess from field shapes. A `Plain` event whose label happens to look like
/// `"QUERY_ALL [HERO]"` is still not an entity action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "snake_case",
    bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>")
)]
pub enum Action<P = serde_json::Value> {
    Entity(EntityAction<P>),
    Plain(PlainAction<P>),
}

impl<P> Action<P> {
    /// Shorthand for a payload-less plain event.
    pub fn plain(action_type: impl Into<String>) -> Self {
        Action::Plain(PlainAction::new(action_type))
    }

    /// Discriminator label, available for every kind of event.
    pub fn action_type(&self) -> &str {
        match self {
            Action::Entity(action) => action.action_type(),
            Action::Plain(action) => action.action_type(),
        }
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, Action::Entity(_))
    }

    pub fn as_entity(&self) -> Option<&EntityAction<P>> {
        match self {
            Action::Entity(action) => Some(action),
            Action::Plain(_) => None,
        }
    }

    pub fn into_entity(self) -> Option<EntityAction<P>> {
        match self {
            Action::Entity(action) => Some(action),
            Action::Plain(_) => None,
        }
    }
}

impl<P> From<EntityAction<P>> for Action<P> {
    fn from(value: EntityAction<P>) -> Self {
        Action::Entity(value)
    }
}

impl<P> From<PlainAction<P>> for Action<P> {
    fn from(value: PlainAction<P>) -> Self {
        Action::Plain(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionbus_core::EntityOp;
    use serde_json::{Value, json};

    #[test]
    fn plain_action_is_not_an_entity_action() {
        let action: Action = Action::plain("QUERY_ALL [HERO]");
        assert!(!action.is_entity());
        assert!(action.as_entity().is_none());
        assert_eq!(action.action_type(), "QUERY_ALL [HERO]");
    }

    #[test]
    fn entity_variant_exposes_its_label() {
        let entity = EntityAction::<Value>::new("Hero", EntityOp::QueryAll, None).unwrap();
        let action = Action::from(entity.clone());
        assert_eq!(action.action_type(), "QUERY_ALL [HERO]");
        assert_eq!(action.into_entity(), Some(entity));
    }

    #[test]
    fn serializes_with_explicit_kind_tag() {
        let action: Action = Action::Plain(PlainAction::new("bar").with_payload(json!("bar")));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value, json!({ "kind": "plain", "type": "bar", "payload": "bar" }));

        let entity = serde_json::from_value::<Action>(json!({
            "kind": "entity",
            "entityName": "Hero",
            "op": "SAVE_DELETE",
            "payload": 42
        }))
        .unwrap();
        let expected = EntityAction::new("Hero", EntityOp::SaveDelete, Some(json!(42))).unwrap();
        assert_eq!(entity, Action::Entity(expected));
    }

    #[test]
    fn plain_null_payload_is_kept_through_the_tag() {
        let action: Action = Action::Plain(PlainAction::new("router/reset").with_payload(Value::Null));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value, json!({ "kind": "plain", "type": "router/reset", "payload": null }));
        assert_eq!(serde_json::from_value::<Action>(value).unwrap(), action);

        let bare: Action = Action::plain("router/reset");
        let value = serde_json::to_value(&bare).unwrap();
        assert_eq!(value, json!({ "kind": "plain", "type": "router/reset" }));
        assert_eq!(serde_json::from_value::<Action>(value).unwrap(), bare);
    }
}
