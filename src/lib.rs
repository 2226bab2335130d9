//! Kanban board view over a remote ticket feed.
//!
//! Tickets and users are fetched once into an immutable [`models::Snapshot`].
//! [`board::BoardEngine`] groups and orders them into columns on demand, and
//! [`view::BoardView`] labels the result for the terminal renderer and the API.

pub mod api;
pub mod board;
pub mod client;
pub mod config;
pub mod labels;
pub mod models;
pub mod render;
pub mod state;
pub mod view;
