//! # isobeam_core - Isostatic Beam Analysis Engine
//!
//! `isobeam_core` solves single-span, statically determinate beams resting on
//! two supports. Given a [`BeamModel`] it computes the support reactions, the
//! shear and bending moment diagrams, their critical points and a numbered
//! calculation trace, then projects the result into renderer-agnostic scenes.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions from input to result, no I/O
//! - **JSON-First**: every input and output type implements Serialize/Deserialize
//! - **Never panics on bad input**: an unsolvable beam comes back as an invalid
//!   [`ResultView`] listing structured [`BeamError`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use isobeam_core::{solve_and_project, BeamModel, DistributedLoad, PointLoad, Support};
//!
//! let beam = BeamModel::new("V-1", 6.0)
//!     .with_support(Support::simple("A", 0.0))
//!     .with_support(Support::roller("B", 6.0))
//!     .with_point_load(PointLoad::down("P1", 3.0, 10.0))
//!     .with_distributed_load(DistributedLoad::uniform("W1", 1.0, 3.0, 5.0));
//!
//! let (result, scenes) = solve_and_project(&beam);
//! assert!(result.is_valid);
//! assert_eq!(scenes.diagrams.diagrams.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`model`] - beam, supports and validation
//! - [`loads`] - point and distributed loads
//! - [`calculations`] - equilibrium, diagrams, critical points, the solver
//! - [`scene`] - graphic scene projection
//! - [`settings`] - sampling, tolerance and drawing parameters
//! - [`units`] - unit symbols and number formatting
//! - [`errors`] - structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod model;
pub mod scene;
pub mod settings;
pub mod units;

pub use calculations::{solve, solve_with, ResultView};
pub use errors::{BeamError, BeamResult};
pub use loads::{Direction, DistributedLoad, PointLoad};
pub use model::{BeamModel, Support, SupportKind};
pub use scene::{project, project_with, GraphicScene, SceneBundle};
pub use settings::{AnalysisSettings, SceneSettings, Settings};

/// Solve a beam and project the result with default settings
pub fn solve_and_project(model: &BeamModel) -> (ResultView, SceneBundle) {
    solve_and_project_with(model, &Settings::default())
}

/// Solve a beam and project the result with explicit settings
pub fn solve_and_project_with(model: &BeamModel, settings: &Settings) -> (ResultView, SceneBundle) {
    let result = solve_with(model, &settings.analysis);
    let scenes = project_with(model, &result, &settings.scene);
    (result, scenes)
}
