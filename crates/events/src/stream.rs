//! Filtered action streams over the shared bus.
//!
//! [`EntityActions`] borrows a bus and hands out independent [`ActionStream`]s,
//! each restricted to the entity actions matching one criterion. Every stream
//! owns its own subscription, so attaching, draining or dropping one stream never
//! changes what another observes.

use std::marker::PhantomData;
use std::sync::mpsc::{RecvError, RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use actionbus_core::EntityOp;

use crate::{Action, ActionFilter, Args, EntityAction, EventBus, Subscription};

/// Entry point for deriving filtered entity action streams from a bus.
///
/// ## Usage Pattern
///
/// ```
/// use actionbus_core::EntityOp;
/// use actionbus_events::{Action, EntityAction, EntityActions, EventBus, InMemoryEventBus};
///
/// let bus = InMemoryEventBus::<Action>::new();
/// let heroes = EntityActions::new(&bus).of_entity_type("Hero");
///
/// bus.publish(Action::plain("router/navigated")).unwrap();
/// bus.publish(EntityAction::new("Hero", EntityOp::QueryAll, None).unwrap().into()).unwrap();
///
/// assert_eq!(heroes.try_recv().unwrap().action_type(), "QUERY_ALL [HERO]");
/// ```
#[derive(Debug)]
pub struct EntityActions<'a, B, P = serde_json::Value> {
    bus: &'a B,
    _payload: PhantomData<fn() -> P>,
}

impl<'a, B, P> EntityActions<'a, B, P>
where
    B: EventBus<Action<P>>,
    P: 'static,
{
    pub fn new(bus: &'a B) -> Self {
        Self {
            bus,
            _payload: PhantomData,
        }
    }

    /// Entity actions accepted by `filter`.
    pub fn matching(&self, filter: ActionFilter<P>) -> ActionStream<P> {
        debug!(filter = filter.name(), "attaching entity action stream");
        ActionStream {
            subscription: self.bus.subscribe(),
            filter,
        }
    }

    /// Entity actions for which `predicate` returns `true`.
    ///
    /// Non-entity events are dropped before the predicate runs.
    pub fn filter<F>(&self, predicate: F) -> ActionStream<P>
    where
        F: Fn(&EntityAction<P>) -> bool + Send + Sync + 'static,
    {
        self.matching(ActionFilter::predicate(predicate))
    }

    /// Every entity action, whatever its entity or operation.
    pub fn of_entity(&self) -> ActionStream<P> {
        self.matching(ActionFilter::any())
    }

    /// Entity actions whose entity name equals `name` (case-sensitive).
    pub fn of_entity_type(&self, name: impl Into<String>) -> ActionStream<P> {
        self.matching(ActionFilter::entity_type(name))
    }

    /// Entity actions for any of `names`.
    pub fn of_entity_types(&self, names: impl Args<String>) -> ActionStream<P> {
        self.matching(ActionFilter::entity_types(names))
    }

    /// Entity actions with any of `ops`.
    pub fn of_op(&self, ops: impl Args<EntityOp>) -> ActionStream<P> {
        self.matching(ActionFilter::ops(ops))
    }

    /// Entity actions whose `type` label is any of `types`.
    pub fn of_type(&self, types: impl Args<String>) -> ActionStream<P> {
        self.matching(ActionFilter::types(types))
    }
}

/// A live, filtered view of the bus.
///
/// Emits matching entity actions in publish order. Dropping the stream
/// unsubscribes it.
#[derive(Debug)]
pub struct ActionStream<P = serde_json::Value> {
    subscription: Subscription<Action<P>>,
    filter: ActionFilter<P>,
}

impl<P: 'static> ActionStream<P> {
    /// Narrow this stream further; both criteria must accept an action.
    pub fn narrow(self, filter: ActionFilter<P>) -> Self {
        Self {
            subscription: self.subscription,
            filter: self.filter.and(filter),
        }
    }
}

impl<P> ActionStream<P> {
    pub fn action_filter(&self) -> &ActionFilter<P> {
        &self.filter
    }

    fn accept(&self, action: Action<P>) -> Option<EntityAction<P>> {
        match action {
            Action::Entity(action) if self.filter.matches_entity(&action) => Some(action),
            other => {
                trace!(
                    filter = self.filter.name(),
                    action_type = other.action_type(),
                    "dropped action"
                );
                None
            }
        }
    }

    /// Block until the next matching action is available.
    ///
    /// Errs once the bus is gone and everything delivered has been drained.
    pub fn recv(&self) -> Result<EntityAction<P>, RecvError> {
        loop {
            if let Some(action) = self.accept(self.subscription.recv()?) {
                return Ok(action);
            }
        }
    }

    /// Next already-delivered matching action, without blocking.
    pub fn try_recv(&self) -> Result<EntityAction<P>, TryRecvError> {
        loop {
            if let Some(action) = self.accept(self.subscription.try_recv()?) {
                return Ok(action);
            }
        }
    }

    /// Block for up to `timeout` in total waiting for a matching action.
    ///
    /// A timeout too large to form a deadline waits like [`ActionStream::recv`].
    pub fn recv_timeout(&self, timeout: Duration) -> Result<EntityAction<P>, RecvTimeoutError> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.recv().map_err(|_| RecvTimeoutError::Disconnected);
        };
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if let Some(action) = self.accept(self.subscription.recv_timeout(remaining)?) {
                return Ok(action);
            }
        }
    }

    /// Drain every matching action delivered so far, without blocking.
    pub fn try_iter(&self) -> impl Iterator<Item = EntityAction<P>> + '_ {
        std::iter::from_fn(move || self.try_recv().ok())
    }
}

/// Blocks for each action; ends when the bus disconnects.
impl<P> Iterator for ActionStream<P> {
    type Item = EntityAction<P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv().ok()
    }
}
