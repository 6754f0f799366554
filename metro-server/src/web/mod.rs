//! Web layer for the metro proxy.
//!
//! Provides the HTTP endpoints the client app calls.

mod dto;
mod routes;
mod state;

pub use dto::{LineQuery, StationQuery};
pub use routes::{AppError, create_router};
pub use state::AppState;
