//! Reusable entity action predicates.

use std::sync::Arc;

use actionbus_core::EntityOp;

use crate::{Action, Args, EntityAction};

type Predicate<P> = dyn Fn(&EntityAction<P>) -> bool + Send + Sync;

/// A cloneable predicate over entity actions.
///
/// Filters only ever see [`EntityAction`]s: [`ActionFilter::matches`] rejects
/// `Action::Plain` events before the predicate runs.
///
/// ```
/// use actionbus_core::EntityOp;
/// use actionbus_events::{ActionFilter, EntityAction};
///
/// let heroes: ActionFilter = ActionFilter::entity_type("Hero").and(ActionFilter::ops(EntityOp::QueryAll));
/// let action = EntityAction::new("Hero", EntityOp::QueryAll, None).unwrap();
/// assert!(heroes.matches_entity(&action));
/// ```
pub struct ActionFilter<P = serde_json::Value> {
    name: Arc<str>,
    predicate: Arc<Predicate<P>>,
}

impl<P> Clone for ActionFilter<P> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<P> core::fmt::Debug for ActionFilter<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionFilter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<P: 'static> ActionFilter<P> {
    fn named<F>(name: impl Into<Arc<str>>, predicate: F) -> Self
    where
        F: Fn(&EntityAction<P>) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Accepts every entity action.
    pub fn any() -> Self {
        Self::named("any", |_| true)
    }

    /// Accepts entity actions for which `predicate` returns `true`.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&EntityAction<P>) -> bool + Send + Sync + 'static,
    {
        Self::named("predicate", predicate)
    }

    /// Accepts actions whose entity name equals `name` exactly (case-sensitive).
    pub fn entity_type(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::named(format!("entity_type({name})"), move |action| {
            action.entity_name() == name
        })
    }

    /// Accepts actions whose entity name is one of `names`.
    pub fn entity_types(names: impl Args<String>) -> Self {
        let names = names.flatten_args();
        Self::named(format!("entity_types{names:?}"), move |action| {
            names.iter().any(|n| n == action.entity_name())
        })
    }

    /// Accepts actions whose operation is one of `ops`.
    pub fn ops(ops: impl Args<EntityOp>) -> Self {
        let ops = ops.flatten_args();
        let labels: Vec<&str> = ops.iter().map(EntityOp::as_str).collect();
        let name = format!("ops{labels:?}");
        Self::named(name, move |action| ops.contains(action.op()))
    }

    /// Accepts actions whose derived `type` label is one of `types`.
    pub fn types(types: impl Args<String>) -> Self {
        let types = types.flatten_args();
        Self::named(format!("types{types:?}"), move |action| {
            types.iter().any(|t| t == action.action_type())
        })
    }

    /// Accepts actions matched by both filters.
    pub fn and(self, other: ActionFilter<P>) -> Self {
        let name = format!("({} && {})", self.name, other.name);
        Self::named(name, move |action| {
            self.matches_entity(action) && other.matches_entity(action)
        })
    }

    /// Accepts actions matched by either filter.
    pub fn or(self, other: ActionFilter<P>) -> Self {
        let name = format!("({} || {})", self.name, other.name);
        Self::named(name, move |action| {
            self.matches_entity(action) || other.matches_entity(action)
        })
    }
}

impl<P> ActionFilter<P> {
    /// Human-readable description, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches_entity(&self, action: &EntityAction<P>) -> bool {
        (self.predicate)(action)
    }

    /// `false` for plain events; otherwise the predicate's verdict.
    pub fn matches(&self, action: &Action<P>) -> bool {
        match action {
            Action::Entity(action) => self.matches_entity(action),
            Action::Plain(_) => false,
        }
    }
}
