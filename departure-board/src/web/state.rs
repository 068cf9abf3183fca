//! Application state for the web layer.

use std::sync::Arc;

use crate::board::BoardConfig;
use crate::schedule::ScheduleLoader;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Schedule document loader
    pub loader: Arc<ScheduleLoader>,

    /// Board configuration (direction labels, result limit)
    pub board: Arc<BoardConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(loader: ScheduleLoader, board: BoardConfig) -> Self {
        Self {
            loader: Arc::new(loader),
            board: Arc::new(board),
        }
    }
}
