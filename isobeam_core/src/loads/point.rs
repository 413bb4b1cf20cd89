use serde::{Deserialize, Serialize};

use super::Direction;

/// A concentrated vertical force.
///
/// `magnitude` is in kN and always non-negative; the sense is carried by
/// `direction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Identifier, unique within the beam
    pub id: String,

    /// Distance from the left end of the beam (m)
    pub position: f64,

    /// Force magnitude (kN)
    pub magnitude: f64,

    /// Sense of the force
    #[serde(default)]
    pub direction: Direction,
}

impl PointLoad {
    /// Create a point load
    pub fn new(id: impl Into<String>, position: f64, magnitude: f64, direction: Direction) -> Self {
        PointLoad {
            id: id.into(),
            position,
            magnitude,
            direction,
        }
    }

    /// Create a downward (gravity) point load
    pub fn down(id: impl Into<String>, position: f64, magnitude: f64) -> Self {
        Self::new(id, position, magnitude, Direction::Down)
    }

    /// Create an upward point load
    pub fn up(id: impl Into<String>, position: f64, magnitude: f64) -> Self {
        Self::new(id, position, magnitude, Direction::Up)
    }

    /// Force with downward taken positive (kN)
    pub fn downward_force(&self) -> f64 {
        -self.direction.sign() * self.magnitude
    }

    /// Moment about `pivot` (kN·m), counter-clockwise positive.
    ///
    /// A downward load to the right of the pivot turns clockwise and
    /// contributes a negative moment.
    pub fn moment_about(&self, pivot: f64) -> f64 {
        self.direction.sign() * self.magnitude * (self.position - pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downward_force_sign() {
        assert_eq!(PointLoad::down("P1", 3.0, 10.0).downward_force(), 10.0);
        assert_eq!(PointLoad::up("P2", 3.0, 4.0).downward_force(), -4.0);
    }

    #[test]
    fn test_moment_about() {
        // 10 kN down, 3 m right of the pivot: clockwise
        assert_eq!(PointLoad::down("P1", 3.0, 10.0).moment_about(0.0), -30.0);
        // Upward load left of the pivot: clockwise as well
        assert_eq!(PointLoad::up("P2", 1.0, 2.0).moment_about(4.0), -6.0);
    }

    #[test]
    fn test_direction_defaults_to_down() {
        let load: PointLoad =
            serde_json::from_str(r#"{ "id": "P1", "position": 2.0, "magnitude": 12.0 }"#).unwrap();
        assert_eq!(load.direction, Direction::Down);
    }
}
