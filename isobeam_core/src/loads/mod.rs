//! Load definitions
//!
//! Loads act vertically on the beam. Point loads are used directly by the
//! solver; distributed loads are first reduced to a statically equivalent
//! point load (see [`DistributedLoad::equivalent_point_load`]).

mod distributed;
mod point;

use serde::{Deserialize, Serialize};

pub use distributed::{DistributedLoad, LoadShape};
pub use point::PointLoad;

/// Vertical sense of a force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
}

impl Direction {
    /// `+1.0` for up, `-1.0` for down
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }

    /// Direction of a signed value where positive means up.
    ///
    /// Zero maps to `Up`.
    pub fn from_signed(value: f64) -> Self {
        if value >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
