//! Distributed loads and their reduction to an equivalent point load.
//!
//! A distributed load varies linearly from `magnitude_start` at `start` to
//! `magnitude_end` at `end`, which covers uniform, triangular and
//! trapezoidal shapes. For reactions and diagrams the load is replaced by a
//! single force equal to its area, acting at its centroid.

use serde::{Deserialize, Serialize};

use super::{Direction, PointLoad};
use crate::errors::{BeamError, BeamResult};

/// Prefix of the identifier given to equivalent point loads
pub const EQUIVALENT_PREFIX: &str = "equiv_";

/// Shape of a linearly varying load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadShape {
    /// Constant intensity
    Uniform,
    /// Zero at start, growing towards the end
    TriangularRising,
    /// Maximum at start, zero at the end
    TriangularFalling,
    /// Non-zero and different at both ends
    Trapezoidal,
}

/// A vertical line load over `[start, end]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Identifier, unique within the beam
    pub id: String,

    /// Start position from the left end (m)
    pub start: f64,

    /// End position from the left end (m)
    pub end: f64,

    /// Intensity at `start` (kN/m)
    pub magnitude_start: f64,

    /// Intensity at `end` (kN/m)
    pub magnitude_end: f64,

    /// Sense of the load
    #[serde(default)]
    pub direction: Direction,
}

impl DistributedLoad {
    /// Create a linearly varying load
    pub fn linear(
        id: impl Into<String>,
        start: f64,
        end: f64,
        magnitude_start: f64,
        magnitude_end: f64,
        direction: Direction,
    ) -> Self {
        DistributedLoad {
            id: id.into(),
            start,
            end,
            magnitude_start,
            magnitude_end,
            direction,
        }
    }

    /// Create a downward uniform load
    pub fn uniform(id: impl Into<String>, start: f64, end: f64, magnitude: f64) -> Self {
        Self::linear(id, start, end, magnitude, magnitude, Direction::Down)
    }

    /// Loaded length (m)
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Classify the load by its end intensities
    pub fn shape(&self) -> LoadShape {
        let a = self.magnitude_start;
        let b = self.magnitude_end;
        if a == b {
            LoadShape::Uniform
        } else if a == 0.0 {
            LoadShape::TriangularRising
        } else if b == 0.0 {
            LoadShape::TriangularFalling
        } else {
            LoadShape::Trapezoidal
        }
    }

    /// Resultant force: average intensity times loaded length (kN)
    pub fn total_force(&self) -> f64 {
        (self.magnitude_start + self.magnitude_end) / 2.0 * self.length()
    }

    /// Position of the resultant (m from the left end of the beam).
    ///
    /// Assumes a non-degenerate extent; see [`Self::equivalent_point_load`].
    pub fn centroid(&self) -> f64 {
        let length = self.length();
        let a = self.magnitude_start;
        let b = self.magnitude_end;
        match self.shape() {
            LoadShape::Uniform => self.start + length / 2.0,
            LoadShape::TriangularRising => self.start + 2.0 * length / 3.0,
            LoadShape::TriangularFalling => self.start + length / 3.0,
            LoadShape::Trapezoidal => self.start + length * (2.0 * b + a) / (3.0 * (a + b)),
        }
    }

    /// Reduce this load to a statically equivalent point load.
    ///
    /// The result has id `equiv_<id>`, magnitude `|total_force|` and the same
    /// direction. Fails with [`BeamError::DegenerateLoad`] when `end <= start`.
    pub fn equivalent_point_load(&self) -> BeamResult<PointLoad> {
        if !(self.length() > 0.0) {
            return Err(BeamError::degenerate_load(&self.id, self.start, self.end));
        }

        // Opposite-signed end intensities can cancel in the trapezoid formula
        let a = self.magnitude_start;
        let b = self.magnitude_end;
        if self.shape() == LoadShape::Trapezoidal && (a + b) == 0.0 {
            return Err(BeamError::invalid_input(
                format!("{}.magnitude", self.id),
                format!("{a} / {b}"),
                "Start and end intensities cancel out",
            ));
        }

        Ok(PointLoad {
            id: format!("{EQUIVALENT_PREFIX}{}", self.id),
            position: self.centroid(),
            magnitude: self.total_force().abs(),
            direction: self.direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_equivalent() {
        // 5 kN/m over [1, 3] -> 10 kN at x = 2
        let load = DistributedLoad::uniform("w1", 1.0, 3.0, 5.0);
        let equiv = load.equivalent_point_load().unwrap();

        assert_eq!(load.shape(), LoadShape::Uniform);
        assert_eq!(equiv.id, "equiv_w1");
        assert_relative_eq!(equiv.magnitude, 10.0, epsilon = 1e-12);
        assert_relative_eq!(equiv.position, 2.0, epsilon = 1e-12);
        assert_eq!(equiv.direction, Direction::Down);
    }

    #[test]
    fn test_triangular_rising_centroid() {
        // 0 -> 6 kN/m over [0, 3]: F = 9 kN at 2 m
        let load = DistributedLoad::linear("w", 0.0, 3.0, 0.0, 6.0, Direction::Down);
        let equiv = load.equivalent_point_load().unwrap();

        assert_eq!(load.shape(), LoadShape::TriangularRising);
        assert_relative_eq!(equiv.magnitude, 9.0, epsilon = 1e-12);
        assert_relative_eq!(equiv.position, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_triangular_falling_centroid() {
        let load = DistributedLoad::linear("w", 1.0, 4.0, 6.0, 0.0, Direction::Down);
        let equiv = load.equivalent_point_load().unwrap();

        assert_eq!(load.shape(), LoadShape::TriangularFalling);
        assert_relative_eq!(equiv.position, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoidal_centroid() {
        // a = 2, b = 4 over [0, 3]: F = 9 kN, x = 3 * (8 + 2) / 18 = 5/3
        let load = DistributedLoad::linear("w", 0.0, 3.0, 2.0, 4.0, Direction::Up);
        let equiv = load.equivalent_point_load().unwrap();

        assert_eq!(load.shape(), LoadShape::Trapezoidal);
        assert_relative_eq!(equiv.magnitude, 9.0, epsilon = 1e-12);
        assert_relative_eq!(equiv.position, 5.0 / 3.0, epsilon = 1e-12);
        assert_eq!(equiv.direction, Direction::Up);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let load = DistributedLoad::uniform("w", 2.0, 2.0, 5.0);
        let err = load.equivalent_point_load().unwrap_err();
        assert_eq!(err, BeamError::degenerate_load("w", 2.0, 2.0));
    }

    #[test]
    fn test_reversed_extent_is_rejected() {
        let load = DistributedLoad::uniform("w", 3.0, 1.0, 5.0);
        assert!(load.equivalent_point_load().is_err());
    }
}
