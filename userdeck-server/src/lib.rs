//! # UserDeck Server
//!
//! REST backend for the UserDeck panel.
//!
//! The server keeps user records in memory, namespaced by the `target`
//! path segment so that several backend flavors can be addressed from
//! the same process. The wire format is plain JSON: bare arrays and
//! bare records, no envelope.

pub mod infra;
pub mod routes;
pub mod users;

pub use infra::app_state::AppState;
pub use routes::create_router;
