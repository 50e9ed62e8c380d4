//! Entity action operators over plain iterators (e.g. a replayed history).

use actionbus_core::EntityOp;

use crate::{Action, ActionFilter, Args, EntityAction};

/// Iterator adapter yielding the entity actions accepted by a filter.
#[derive(Debug, Clone)]
pub struct Matching<I, P = serde_json::Value> {
    inner: I,
    filter: ActionFilter<P>,
}

impl<I, P> Iterator for Matching<I, P>
where
    I: Iterator<Item = Action<P>>,
{
    type Item = EntityAction<P>;

    fn next(&mut self) -> Option<Self::Item> {
        for action in self.inner.by_ref() {
            match action {
                Action::Entity(action) if self.filter.matches_entity(&action) => {
                    return Some(action);
                }
                _ => {}
            }
        }
        None
    }
}

/// The stream operators of [`EntityActions`](crate::EntityActions), for any
/// iterator of actions.
pub trait FilterActions<P: 'static>: Iterator<Item = Action<P>> + Sized {
    fn matching(self, filter: ActionFilter<P>) -> Matching<Self, P> {
        Matching {
            inner: self,
            filter,
        }
    }

    fn entity_actions(self) -> Matching<Self, P> {
        self.matching(ActionFilter::any())
    }

    fn filter_entity<F>(self, predicate: F) -> Matching<Self, P>
    where
        F: Fn(&EntityAction<P>) -> bool + Send + Sync + 'static,
    {
        self.matching(ActionFilter::predicate(predicate))
    }

    fn of_entity_type(self, name: impl Into<String>) -> Matching<Self, P> {
        self.matching(ActionFilter::entity_type(name))
    }

    fn of_entity_types(self, names: impl Args<String>) -> Matching<Self, P> {
        self.matching(ActionFilter::entity_types(names))
    }

    fn of_op(self, ops: impl Args<EntityOp>) -> Matching<Self, P> {
        self.matching(ActionFilter::ops(ops))
    }

    fn of_type(self, types: impl Args<String>) -> Matching<Self, P> {
        self.matching(ActionFilter::types(types))
    }
}

impl<I, P: 'static> FilterActions<P> for I where I: Iterator<Item = Action<P>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn history() -> Vec<Action> {
        vec![
            Action::plain("foo"),
            EntityAction::new("Hero", EntityOp::QueryAll, None).unwrap().into(),
            EntityAction::new("Villain", EntityOp::QueryAll, None).unwrap().into(),
            Action::plain("bar"),
            EntityAction::new("Hero", EntityOp::SaveDelete, Some(json!(42))).unwrap().into(),
        ]
    }

    #[test]
    fn replayed_history_filters_like_a_stream() {
        let heroes: Vec<_> = history().into_iter().of_entity_type("Hero").collect();
        let ops: Vec<_> = heroes.iter().map(|a| a.op().clone()).collect();
        assert_eq!(ops, vec![EntityOp::QueryAll, EntityOp::SaveDelete]);

        let queries = history().into_iter().of_op(EntityOp::QueryAll).count();
        assert_eq!(queries, 2);

        let all = history().into_iter().entity_actions().count();
        assert_eq!(all, 3);
    }

    #[test]
    fn filter_entity_sees_only_entity_actions() {
        let with_payload: Vec<_> = history()
            .into_iter()
            .filter_entity(|a| a.payload().is_some())
            .collect();
        assert_eq!(with_payload.len(), 1);
        assert_eq!(with_payload[0].action_type(), "SAVE_DELETE [HERO]");
    }
}
