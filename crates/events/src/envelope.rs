use serde::{Deserialize, Deserializer, Serialize};

use actionbus_core::{ActionError, ActionResult, Entity, EntityOp};

/// Canonical label for an `(op, entity_name)` pair: `"<OP> [<ENTITY_NAME_UPPER>]"`.
///
/// External dispatch may pattern-match on this string, so the format is fixed:
/// the tag name, one space, then the upper-cased entity name in square brackets.
///
/// ```
/// use actionbus_core::EntityOp;
/// use actionbus_events::format_action_type_name;
///
/// assert_eq!(format_action_type_name(&EntityOp::QueryAll, "Hero"), "QUERY_ALL [HERO]");
/// ```
pub fn format_action_type_name(op: &EntityOp, entity_name: &str) -> String {
    format!("{} [{}]", op, entity_name.to_uppercase())
}

fn validate_entity_name(entity_name: String) -> ActionResult<String> {
    if entity_name.trim().is_empty() {
        return Err(ActionError::InvalidEntityName);
    }
    Ok(entity_name)
}

/// Envelope for an operation performed against a named entity kind.
///
/// This is the unit routed over the shared action bus.
///
/// Notes:
/// - `entity_name` and `op` are fixed at construction; there is no in-place mutation.
/// - `action_type` is derived from `(op, entity_name)` at construction and never
///   depends on `payload`.
/// - Equality is structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    try_from = "RawEntityAction<P>",
    bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>")
)]
pub struct EntityAction<P = serde_json::Value> {
    entity_name: String,
    op: EntityOp,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<P>,

    #[serde(rename = "type")]
    action_type: String,
}

impl<P> EntityAction<P> {
    /// Create an action for `entity_name`.
    ///
    /// Fails with [`ActionError::InvalidEntityName`] when the name is empty or blank.
    pub fn new(
        entity_name: impl Into<String>,
        op: EntityOp,
        payload: Option<P>,
    ) -> ActionResult<Self> {
        let entity_name = validate_entity_name(entity_name.into())?;
        let action_type = format_action_type_name(&op, &entity_name);
        Ok(Self {
            entity_name,
            op,
            payload,
            action_type,
        })
    }

    /// Create an action for a typed entity kind.
    pub fn for_entity<E: Entity>(op: EntityOp, payload: Option<P>) -> ActionResult<Self> {
        Self::new(E::ENTITY_NAME, op, payload)
    }

    /// Create an action for the same entity as `source`, carrying its payload forward.
    pub fn from_action(source: &EntityAction<P>, op: EntityOp) -> Self
    where
        P: Clone,
    {
        Self::from_action_with(source, op, source.payload.clone())
    }

    /// Create an action for the same entity as `source` with an explicit payload.
    ///
    /// `payload` replaces the source payload outright: passing `None` yields an
    /// action with **no** payload, it does not fall back to the source's. Use
    /// [`EntityAction::from_action`] to forward the source payload.
    pub fn from_action_with(source: &EntityAction<P>, op: EntityOp, payload: Option<P>) -> Self {
        let entity_name = source.entity_name.clone();
        let action_type = format_action_type_name(&op, &entity_name);
        Self {
            entity_name,
            op,
            payload,
            action_type,
        }
    }

    pub fn builder() -> EntityActionBuilder<P> {
        EntityActionBuilder::default()
    }

    /// See [`format_action_type_name`].
    pub fn format_action_type_name(op: &EntityOp, entity_name: &str) -> String {
        format_action_type_name(op, entity_name)
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn op(&self) -> &EntityOp {
        &self.op
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// The derived `type` label.
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn into_payload(self) -> Option<P> {
        self.payload
    }
}

/// Step-wise construction of an [`EntityAction`].
///
/// `build()` checks the entity name first, then the operation.
#[derive(Debug, Clone)]
pub struct EntityActionBuilder<P> {
    entity_name: Option<String>,
    op: Option<EntityOp>,
    payload: Option<P>,
}

impl<P> Default for EntityActionBuilder<P> {
    fn default() -> Self {
        Self {
            entity_name: None,
            op: None,
            payload: None,
        }
    }
}

impl<P> EntityActionBuilder<P> {
    /// Start from an existing action: its entity name and payload are carried,
    /// its operation is not.
    pub fn from_action(source: &EntityAction<P>) -> Self
    where
        P: Clone,
    {
        Self {
            entity_name: Some(source.entity_name.clone()),
            op: None,
            payload: source.payload.clone(),
        }
    }

    pub fn entity_name(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = Some(entity_name.into());
        self
    }

    pub fn op(mut self, op: EntityOp) -> Self {
        self.op = Some(op);
        self
    }

    /// Set the payload. `None` clears any payload carried from a source action.
    pub fn payload(mut self, payload: Option<P>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> ActionResult<EntityAction<P>> {
        let entity_name = self.entity_name.ok_or(ActionError::InvalidEntityName)?;
        let entity_name = validate_entity_name(entity_name)?;
        let op = self
            .op
            .ok_or_else(|| ActionError::missing_operation("no operation was supplied"))?;
        EntityAction::new(entity_name, op, self.payload)
    }
}

/// Wire shape of an action before validation.
///
/// An absent `payload` key means no payload; a present `null` is kept as a value.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "P: Deserialize<'de>"))]
struct RawEntityAction<P> {
    entity_name: Option<String>,
    op: Option<EntityOp>,
    #[serde(default, deserialize_with = "present_payload")]
    payload: Option<P>,
    #[serde(rename = "type")]
    action_type: Option<String>,
}

pub(crate) fn present_payload<'de, D, P>(deserializer: D) -> Result<Option<P>, D::Error>
where
    D: Deserializer<'de>,
    P: Deserialize<'de>,
{
    P::deserialize(deserializer).map(Some)
}

impl<P> TryFrom<RawEntityAction<P>> for EntityAction<P> {
    type Error = ActionError;

    fn try_from(raw: RawEntityAction<P>) -> Result<Self, Self::Error> {
        let mut builder = EntityActionBuilder::default().payload(raw.payload);
        if let Some(name) = raw.entity_name {
            builder = builder.entity_name(name);
        }
        if let Some(op) = raw.op {
            builder = builder.op(op);
        }
        let action = builder.build()?;

        match raw.action_type {
            Some(found) if found != action.action_type => {
                Err(ActionError::invalid_label(action.action_type, found))
            }
            _ => Ok(action),
        }
    }
}
