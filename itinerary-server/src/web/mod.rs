//! Web layer for the itinerary sorter.
//!
//! Accepts travel cards over HTTP and answers with the ordered trip.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
