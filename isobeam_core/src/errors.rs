//! # Error Types
//!
//! Structured error types for isobeam_core. A solve never returns these
//! through `Err` to its caller: validation problems are collected into
//! [`ResultView::errors`](crate::calculations::ResultView::errors) so the
//! caller always gets a result it can display.
//!
//! ## Example
//!
//! ```rust
//! use isobeam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length_m: f64) -> BeamResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "length",
//!             length_m.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for isobeam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis.
///
/// Each variant carries enough context to explain the problem without
/// looking at the input model again.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (non-finite, negative, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The beam does not have exactly the two supports a determinate solve needs
    #[error("Structure is not statically determinate: found {found} support(s), expected {expected}")]
    SupportCount { found: usize, expected: usize },

    /// Two supports share the same position, so no lever arm exists between them
    #[error("Supports '{left}' and '{right}' coincide at x = {position} m")]
    CoincidentSupports {
        left: String,
        right: String,
        position: f64,
    },

    /// A support kind that would add more unknown reactions than equilibrium can resolve
    #[error("Support '{support_id}' of kind '{kind}' is not allowed in a statically determinate beam")]
    UnsupportedSupportKind { support_id: String, kind: String },

    /// A distributed load with zero or negative extent
    #[error("Distributed load '{load_id}' has degenerate extent [{start}, {end}]")]
    DegenerateLoad { load_id: String, start: f64, end: f64 },

    /// A support or load placed outside the beam
    #[error("'{item}' at x = {position} m lies outside the beam [0, {length}]")]
    OutOfSpan {
        item: String,
        position: f64,
        length: f64,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SupportCount error
    pub fn support_count(found: usize, expected: usize) -> Self {
        BeamError::SupportCount { found, expected }
    }

    /// Create a CoincidentSupports error
    pub fn coincident_supports(
        left: impl Into<String>,
        right: impl Into<String>,
        position: f64,
    ) -> Self {
        BeamError::CoincidentSupports {
            left: left.into(),
            right: right.into(),
            position,
        }
    }

    /// Create an UnsupportedSupportKind error
    pub fn unsupported_support_kind(support_id: impl Into<String>, kind: impl Into<String>) -> Self {
        BeamError::UnsupportedSupportKind {
            support_id: support_id.into(),
            kind: kind.into(),
        }
    }

    /// Create a DegenerateLoad error
    pub fn degenerate_load(load_id: impl Into<String>, start: f64, end: f64) -> Self {
        BeamError::DegenerateLoad {
            load_id: load_id.into(),
            start,
            end,
        }
    }

    /// Create an OutOfSpan error
    pub fn out_of_span(item: impl Into<String>, position: f64, length: f64) -> Self {
        BeamError::OutOfSpan {
            item: item.into(),
            position,
            length,
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        BeamError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether this error describes the support topology rather than a bad value
    pub fn is_topology_error(&self) -> bool {
        matches!(
            self,
            BeamError::SupportCount { .. }
                | BeamError::CoincidentSupports { .. }
                | BeamError::UnsupportedSupportKind { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::SupportCount { .. } => "SUPPORT_COUNT",
            BeamError::CoincidentSupports { .. } => "COINCIDENT_SUPPORTS",
            BeamError::UnsupportedSupportKind { .. } => "UNSUPPORTED_SUPPORT_KIND",
            BeamError::DegenerateLoad { .. } => "DEGENERATE_LOAD",
            BeamError::OutOfSpan { .. } => "OUT_OF_SPAN",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for BeamError {
    fn from(err: serde_json::Error) -> Self {
        BeamError::serialization(err.to_string())
    }
}
