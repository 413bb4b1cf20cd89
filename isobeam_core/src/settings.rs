//! # Settings
//!
//! Tunable constants for the solver and the scene projector. Every field has
//! a default, and `#[serde(default)]` lets a settings file name only the
//! values it wants to change.
//!
//! ```rust
//! use isobeam_core::settings::Settings;
//!
//! let settings = Settings::from_json(r#"{ "scene": { "scale": 50.0 } }"#).unwrap();
//! assert_eq!(settings.scene.scale, 50.0);
//! assert_eq!(settings.analysis.moment_samples, 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::BeamResult;
use crate::units::{DEFAULT_DECIMALS, MAX_DECIMALS};

/// Smallest polyline a diagram segment may be sampled with
pub const MIN_SAMPLES: usize = 2;

/// File-level settings container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Solver and diagram settings
    pub analysis: AnalysisSettings,

    /// Scene projection settings
    pub scene: SceneSettings,
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> BeamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Settings used while solving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Points per moment segment polyline
    pub moment_samples: usize,

    /// Points per shear segment polyline
    pub shear_samples: usize,

    /// Values at or below this magnitude are not reported as discontinuities
    pub zero_tolerance: f64,

    /// Decimals used in equation and description strings
    pub display_decimals: u32,
}

impl AnalysisSettings {
    /// Moment sample count, never below [`MIN_SAMPLES`]
    pub fn moment_sample_count(&self) -> usize {
        self.moment_samples.max(MIN_SAMPLES)
    }

    /// Shear sample count, never below [`MIN_SAMPLES`]
    pub fn shear_sample_count(&self) -> usize {
        self.shear_samples.max(MIN_SAMPLES)
    }

    /// Display decimals, never above [`MAX_DECIMALS`]
    pub fn decimals(&self) -> u32 {
        self.display_decimals.min(MAX_DECIMALS)
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            moment_samples: 20,
            shear_samples: 5,
            zero_tolerance: 0.001,
            display_decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Settings used while projecting a solved beam into scenes.
///
/// All values are in scene units. The renderer decides how scene units map
/// onto its own canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Drawing units per metre
    pub scale: f64,

    /// Vertical coordinate of the beam axis
    pub beam_y: f64,

    /// Diagram values are divided by this before being drawn
    pub diagram_value_scale: f64,

    /// Vertical offset of the shear overlay
    pub shear_offset: f64,

    /// Vertical offset of the moment overlay
    pub moment_offset: f64,

    /// Height of the span label above the beam axis
    pub span_label_offset: f64,

    /// Height of the support letters above the beam axis
    pub support_label_offset: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        SceneSettings {
            scale: 100.0,
            beam_y: 2.0,
            diagram_value_scale: 10.0,
            shear_offset: 100.0,
            moment_offset: 250.0,
            span_label_offset: 1.0,
            support_label_offset: 1.2,
        }
    }
}
