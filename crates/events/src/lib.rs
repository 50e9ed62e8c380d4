//! `actionbus-events` — entity action envelopes and filtered action streams.
//!
//! Producers publish [`Action`]s (entity actions mixed with unrelated events)
//! onto one shared [`EventBus`]. Consumers narrow it with [`EntityActions`],
//! each operator returning an independent [`ActionStream`].

pub mod args;
pub mod bus;
pub mod envelope;
pub mod event;
pub mod filter;
pub mod in_memory_bus;
pub mod iter;
pub mod stream;

pub use args::{Args, flatten_args};
pub use bus::{EventBus, Subscription};
pub use envelope::{EntityAction, EntityActionBuilder, format_action_type_name};
pub use event::{Action, PlainAction};
pub use filter::ActionFilter;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use iter::{FilterActions, Matching};
pub use stream::{ActionStream, EntityActions};
