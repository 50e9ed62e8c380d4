//! `actionbus-core` — entity action building blocks.
//!
//! This crate contains the operation taxonomy and error model shared by the
//! envelope and the stream filter (no transport concerns).

pub mod entity;
pub mod error;
pub mod op;

pub use entity::Entity;
pub use error::{ActionError, ActionResult};
pub use op::{CustomOp, EntityOp};
