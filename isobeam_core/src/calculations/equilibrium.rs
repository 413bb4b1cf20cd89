//! Support reactions from static equilibrium.
//!
//! With two vertical supports the reactions follow directly from two
//! equations, no iteration involved:
//!
//! ```text
//! ∑MA = 0  ->  RB = -MA / (xB - xA)
//! ∑Fy = 0  ->  RA = ∑F - RB
//! ```
//!
//! ## Sign Convention
//! - Load sum `∑F`: downward loads positive, upward loads negative
//! - Moments about A: counter-clockwise positive, so a downward load to the
//!   right of A contributes `-P·(x - xA)`
//! - Reactions: positive value means the support pushes up

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::loads::{Direction, PointLoad};
use crate::model::Support;

/// Kind of reaction a support provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    #[default]
    Vertical,
    Moment,
}

/// Force (or moment) exerted by a support on the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Identifier of the support providing this reaction
    pub support_id: String,

    /// Position of the support (m)
    pub position: f64,

    /// Absolute value (kN, or kN·m for moments)
    pub magnitude: f64,

    pub kind: ReactionKind,

    pub direction: Direction,
}

impl Reaction {
    /// Build a vertical reaction from a signed value (positive up)
    pub fn vertical(support: &Support, signed_value: f64) -> Self {
        Reaction {
            support_id: support.id.clone(),
            position: support.position,
            magnitude: signed_value.abs(),
            kind: ReactionKind::Vertical,
            direction: Direction::from_signed(signed_value),
        }
    }

    /// Value with upward taken positive
    pub fn signed_value(&self) -> f64 {
        self.direction.sign() * self.magnitude
    }
}

/// Intermediate quantities of the equilibrium solve, kept for the trace
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumSolution {
    /// Distance between the supports (m)
    pub support_spacing: f64,

    /// Sum of loads, downward positive (kN)
    pub total_load: f64,

    /// Moment of all loads about the left support, counter-clockwise positive (kN·m)
    pub moment_about_left: f64,

    /// Left reaction, upward positive (kN)
    pub left_value: f64,

    /// Right reaction, upward positive (kN)
    pub right_value: f64,

    pub left: Reaction,

    pub right: Reaction,
}

impl EquilibriumSolution {
    /// Reactions ordered left to right
    pub fn reactions(&self) -> Vec<Reaction> {
        vec![self.left.clone(), self.right.clone()]
    }
}

/// Solve the two vertical reactions of a beam on `left` and `right`.
///
/// `loads` must already include the equivalent loads of any distributed
/// loads. Fails when the supports coincide or are given right-to-left.
pub fn solve_reactions(left: &Support, right: &Support, loads: &[PointLoad]) -> BeamResult<EquilibriumSolution> {
    let support_spacing = right.position - left.position;
    if !(support_spacing > 0.0) {
        return Err(BeamError::coincident_supports(&left.id, &right.id, left.position));
    }

    let total_load: f64 = loads.iter().map(PointLoad::downward_force).sum();
    let moment_about_left: f64 = loads.iter().map(|load| load.moment_about(left.position)).sum();

    let right_value = -moment_about_left / support_spacing;
    let left_value = total_load - right_value;

    tracing::debug!(
        total_load,
        moment_about_left,
        left_value,
        right_value,
        "solved support reactions"
    );

    Ok(EquilibriumSolution {
        support_spacing,
        total_load,
        moment_about_left,
        left_value,
        right_value,
        left: Reaction::vertical(left, left_value),
        right: Reaction::vertical(right, right_value),
    })
}
