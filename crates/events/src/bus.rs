//! Action bus publishing/subscription abstraction (transport seam).
//!
//! The bus is the shared notification channel every producer publishes onto and
//! every consumer derives its filtered streams from. The filtering layer only
//! borrows a bus to subscribe; the transport owns the bus and its lifecycle.
//!
//! ## Contract
//!
//! - **Broadcast**: each subscription receives every message published after it
//!   was created.
//! - **Serialized**: a single subscription observes messages in one total order,
//!   the order in which the bus accepted them.
//! - **No persistence**: a subscription created after a publish does not see it.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// A subscription to the bus.
///
/// Dropping the subscription unsubscribes it; other subscriptions and the bus
/// itself are unaffected.
///
/// ## Usage Pattern
///
/// ```ignore
/// let subscription = bus.subscribe();
///
/// loop {
///     match subscription.recv_timeout(Duration::from_secs(1)) {
///         Ok(action) => handle(action),
///         Err(RecvTimeoutError::Timeout) => continue,  // Check for shutdown
///         Err(RecvTimeoutError::Disconnected) => break,  // Bus closed
///     }
/// }
/// ```
///
/// Subscriptions are designed for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Transport-agnostic pub/sub bus.
///
/// Implementations may be in-memory channels or backed by an external broker;
/// the filtering layer only relies on `subscribe()`.
///
/// `publish()` can fail (e.g. the transport is unavailable). Failures are
/// surfaced to the producer; there is no retry at this layer.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
