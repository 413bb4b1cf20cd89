//! # Beam Calculations
//!
//! The analysis pipeline for a statically determinate beam. Data flows one
//! way, each stage consuming the previous one's output:
//!
//! ```text
//! BeamModel -> equivalent loads -> reactions -> V(x) -> M(x) -> critical points -> ResultView
//! ```
//!
//! - [`equilibrium`] - support reactions from ∑Fy = 0 and ∑MA = 0
//! - [`diagrams`] - piecewise shear and moment diagrams
//! - [`critical_points`] - zeros, jumps and extrema of a diagram
//! - [`steps`] - numbered calculation trace
//! - [`solver`] - runs the pipeline and assembles the [`ResultView`]
//!
//! Every function here is pure: no shared state, no I/O.

pub mod critical_points;
pub mod diagrams;
pub mod equilibrium;
pub mod solver;
pub mod steps;

pub use critical_points::{CriticalPoint, CriticalPointKind, DiagramKind};
pub use diagrams::{DiagramPoint, DiagramSegment};
pub use equilibrium::{Reaction, ReactionKind};
pub use solver::{solve, solve_with, ResultView};
pub use steps::CalculationStep;
