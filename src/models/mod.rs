//! Domain models for the kanban board.
//!
//! # Core Concepts
//!
//! - [`Task`]: A ticket on the board, owned by a user and carrying a status and priority.
//! - [`User`]: Someone who owns tickets. Looked up by identifier only.
//! - [`Snapshot`]: The immutable `(tasks, users)` pair from the last successful fetch.
//!   A new fetch replaces the whole snapshot, it is never patched in place.

mod snapshot;
mod task;
mod user;

pub use snapshot::*;
pub use task::*;
pub use user::*;
