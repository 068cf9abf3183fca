//! Web layer for the departure board.
//!
//! Serves the board page and a JSON view of the same data.

mod dto;
mod links;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use links::train_details_url;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
