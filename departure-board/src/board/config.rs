//! Board configuration.

use std::collections::HashMap;

use crate::domain::Direction;

/// Configuration for building a departure board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Display label for each direction. Schedule files index departures
    /// by these labels.
    pub labels: HashMap<Direction, String>,

    /// Maximum number of departures shown.
    pub max_departures: usize,
}

impl BoardConfig {
    /// Create a configuration with the given labels and result limit.
    pub fn new(labels: HashMap<Direction, String>, max_departures: usize) -> Self {
        Self {
            labels,
            max_departures,
        }
    }

    /// Display label for a direction, if one is configured.
    pub fn label(&self, direction: Direction) -> Option<&str> {
        self.labels.get(&direction).map(String::as_str)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        let labels = HashMap::from([
            (Direction::Up, "上り".to_string()),
            (Direction::Down, "下り".to_string()),
            (Direction::Extra, "長野電鉄".to_string()),
        ]);

        Self {
            labels,
            max_departures: 3,
        }
    }
}
