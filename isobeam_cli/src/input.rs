//! Loading of beam models and settings files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use isobeam_core::{BeamModel, DistributedLoad, PointLoad, Settings, Support};

/// Read a beam model from a JSON file
pub fn load_model(path: &Path) -> Result<BeamModel> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file: {}", path.display()))?;
    let model = BeamModel::from_json(&json)
        .with_context(|| format!("Failed to parse model file: {}", path.display()))?;
    tracing::debug!(beam = %model.id, supports = model.supports.len(), "loaded model");
    Ok(model)
}

/// Read settings from a JSON file, or use the defaults when no file is given
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    Settings::from_json(&json).with_context(|| format!("Failed to parse settings file: {}", path.display()))
}

/// Built-in 6 m demonstration beam
pub fn demo_model() -> BeamModel {
    BeamModel::new("demo", 6.0)
        .with_support(Support::simple("A", 0.0))
        .with_support(Support::roller("B", 6.0))
        .with_point_load(PointLoad::down("P1", 3.0, 10.0))
        .with_distributed_load(DistributedLoad::uniform("W1", 1.0, 3.0, 5.0))
}
