//! # Beam Model
//!
//! The physical description of a beam: its length, its supports and the
//! loads acting on it. This is the only input the solver needs.
//!
//! ## Example
//!
//! ```rust
//! use isobeam_core::model::{BeamModel, Support};
//! use isobeam_core::loads::{DistributedLoad, PointLoad};
//!
//! let beam = BeamModel::new("V-1", 6.0)
//!     .with_support(Support::simple("A", 0.0))
//!     .with_support(Support::roller("B", 6.0))
//!     .with_point_load(PointLoad::down("P1", 3.0, 10.0))
//!     .with_distributed_load(DistributedLoad::uniform("W1", 1.0, 3.0, 5.0));
//!
//! assert!(beam.validate().is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::loads::{DistributedLoad, PointLoad};

/// Number of supports a statically determinate single-span beam has
pub const REQUIRED_SUPPORTS: usize = 2;

/// Equilibrium equations left once loads are purely vertical (ΣFy, ΣM)
pub const VERTICAL_EQUATIONS: usize = 2;

/// Support condition.
///
/// Only `Simple` and `Roller` are accepted by the solver. `Fixed` exists so
/// models can describe it and be rejected with a clear message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SupportKind {
    /// Pinned support - restrains vertical and horizontal displacement
    #[default]
    Simple,
    /// Roller - restrains vertical displacement only
    Roller,
    /// Fixed - restrains displacement and rotation
    Fixed,
}

impl SupportKind {
    /// Returns true if this support restrains rotation
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }

    /// Unknown reactions this support introduces under vertical loading
    pub fn unknown_reactions(&self) -> usize {
        match self {
            SupportKind::Simple | SupportKind::Roller => 1,
            SupportKind::Fixed => 2,
        }
    }

    /// Whether the vertical-only solver can handle this kind
    pub fn is_determinate_kind(&self) -> bool {
        !self.restrains_rotation()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportKind::Simple => "simple",
            SupportKind::Roller => "roller",
            SupportKind::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A support at a point along the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Identifier, unique within the beam
    pub id: String,

    /// Distance from the left end (m)
    pub position: f64,

    /// Support condition
    #[serde(default)]
    pub kind: SupportKind,
}

impl Support {
    pub fn new(id: impl Into<String>, position: f64, kind: SupportKind) -> Self {
        Support {
            id: id.into(),
            position,
            kind,
        }
    }

    pub fn simple(id: impl Into<String>, position: f64) -> Self {
        Self::new(id, position, SupportKind::Simple)
    }

    pub fn roller(id: impl Into<String>, position: f64) -> Self {
        Self::new(id, position, SupportKind::Roller)
    }

    pub fn fixed(id: impl Into<String>, position: f64) -> Self {
        Self::new(id, position, SupportKind::Fixed)
    }
}

/// A single-span beam with its supports and loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamModel {
    /// Identifier of the beam
    pub id: String,

    /// Total length (m)
    pub length: f64,

    /// Supports, expected in ascending position order
    #[serde(default)]
    pub supports: Vec<Support>,

    /// Concentrated loads
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,

    /// Line loads
    #[serde(default)]
    pub distributed_loads: Vec<DistributedLoad>,
}

impl BeamModel {
    /// Create an unloaded, unsupported beam
    pub fn new(id: impl Into<String>, length: f64) -> Self {
        BeamModel {
            id: id.into(),
            length,
            supports: Vec::new(),
            point_loads: Vec::new(),
            distributed_loads: Vec::new(),
        }
    }

    /// Parse a beam from JSON
    pub fn from_json(json: &str) -> BeamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a support, keeping supports ordered by position (builder pattern)
    pub fn with_support(mut self, support: Support) -> Self {
        self.supports.push(support);
        self.supports.sort_by(|a, b| a.position.total_cmp(&b.position));
        self
    }

    /// Add a point load (builder pattern)
    pub fn with_point_load(mut self, load: PointLoad) -> Self {
        self.point_loads.push(load);
        self
    }

    /// Add a distributed load (builder pattern)
    pub fn with_distributed_load(mut self, load: DistributedLoad) -> Self {
        self.distributed_loads.push(load);
        self
    }

    /// Supports sorted by position, left to right
    pub fn ordered_supports(&self) -> Vec<&Support> {
        let mut supports: Vec<&Support> = self.supports.iter().collect();
        supports.sort_by(|a, b| a.position.total_cmp(&b.position));
        supports
    }

    /// Total unknown reactions introduced by all supports under vertical loading
    pub fn unknown_reactions(&self) -> usize {
        self.supports.iter().map(|s| s.kind.unknown_reactions()).sum()
    }

    /// Check the model and return every problem found.
    ///
    /// An empty list means the beam can be solved.
    pub fn validate(&self) -> Vec<BeamError> {
        let mut errors = Vec::new();

        let length_ok = self.length.is_finite() && self.length > 0.0;
        if !length_ok {
            errors.push(BeamError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be a positive number",
            ));
        }

        errors.extend(self.validate_topology());

        for support in &self.supports {
            self.check_position(&format!("support {}", support.id), support.position, length_ok, &mut errors);
        }

        for load in &self.point_loads {
            self.check_position(&format!("load {}", load.id), load.position, length_ok, &mut errors);
            check_magnitude(&format!("{}.magnitude", load.id), load.magnitude, &mut errors);
        }

        for load in &self.distributed_loads {
            let item = format!("load {}", load.id);
            self.check_position(&item, load.start, length_ok, &mut errors);
            self.check_position(&item, load.end, length_ok, &mut errors);
            check_magnitude(&format!("{}.magnitude_start", load.id), load.magnitude_start, &mut errors);
            check_magnitude(&format!("{}.magnitude_end", load.id), load.magnitude_end, &mut errors);
            if load.start.is_finite() && load.end.is_finite() && load.end <= load.start {
                errors.push(BeamError::degenerate_load(&load.id, load.start, load.end));
            }
        }

        errors
    }

    /// Support count, kinds and spacing
    fn validate_topology(&self) -> Vec<BeamError> {
        let mut errors = Vec::new();

        if self.supports.len() != REQUIRED_SUPPORTS {
            errors.push(BeamError::support_count(self.supports.len(), REQUIRED_SUPPORTS));
        }

        for support in self.supports.iter().filter(|s| !s.kind.is_determinate_kind()) {
            errors.push(BeamError::unsupported_support_kind(&support.id, support.kind.as_str()));
        }

        let ordered = self.ordered_supports();
        for pair in ordered.windows(2) {
            if pair[1].position - pair[0].position <= 0.0 {
                errors.push(BeamError::coincident_supports(&pair[0].id, &pair[1].id, pair[0].position));
            }
        }

        errors
    }

    fn check_position(&self, item: &str, position: f64, length_ok: bool, errors: &mut Vec<BeamError>) {
        if !position.is_finite() {
            errors.push(BeamError::invalid_input(item, position.to_string(), "Position must be a finite number"));
        } else if length_ok && (position < 0.0 || position > self.length) {
            errors.push(BeamError::out_of_span(item, position, self.length));
        }
    }
}

fn check_magnitude(field: &str, magnitude: f64, errors: &mut Vec<BeamError>) {
    if !magnitude.is_finite() || magnitude < 0.0 {
        errors.push(BeamError::invalid_input(
            field,
            magnitude.to_string(),
            "Magnitude must be a non-negative number; use direction for the sense",
        ));
    }
}
