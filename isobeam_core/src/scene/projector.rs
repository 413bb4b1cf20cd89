//! Projection of a solved beam into graphic scenes.
//!
//! Produces two independent scenes: the structure (member, supports, loads,
//! reactions, labels) and the diagrams (shear and moment overlays). Diagram
//! values are negated so that a positive value is drawn above the axis in a
//! y-down drawing space, then shifted by a fixed offset per diagram so the
//! two overlays do not collide.

use serde::{Deserialize, Serialize};

use super::{
    GraphicDiagram, GraphicLoad, GraphicLoadKind, GraphicMember, GraphicReaction, GraphicScene,
    GraphicSupport, MemberKind, SceneLabel, ScenePoint,
};
use crate::calculations::{DiagramKind, DiagramSegment, ResultView};
use crate::model::BeamModel;
use crate::settings::SceneSettings;
use crate::units::Unit;

/// Height of the shear diagram title
const SHEAR_TITLE_Y: f64 = -0.5;

/// Height of the moment diagram title
const MOMENT_TITLE_Y: f64 = 2.0;

/// The two scenes derived from one solved beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneBundle {
    /// Beam, supports, loads, reactions and labels
    pub main: GraphicScene,
    /// Shear and moment overlays
    pub diagrams: GraphicScene,
}

/// Letter for the support at `index` in position order: `A`, `B`, ...
pub fn support_letter(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => format!("S{}", index + 1),
    }
}

/// Project with default scene settings
pub fn project(model: &BeamModel, result: &ResultView) -> SceneBundle {
    project_with(model, result, &SceneSettings::default())
}

/// Project a solved beam into its structural and diagram scenes.
///
/// An invalid result yields two empty scenes carrying only the scale.
#[tracing::instrument(skip_all, fields(beam = %model.id))]
pub fn project_with(model: &BeamModel, result: &ResultView, settings: &SceneSettings) -> SceneBundle {
    if !result.is_valid {
        tracing::warn!("projection requested for an invalid result; returning empty scenes");
        return SceneBundle {
            main: GraphicScene::empty(settings.scale),
            diagrams: GraphicScene::empty(settings.scale),
        };
    }

    SceneBundle {
        main: main_scene(model, result, settings),
        diagrams: diagram_scene(model.length, result, settings),
    }
}

fn main_scene(model: &BeamModel, result: &ResultView, settings: &SceneSettings) -> GraphicScene {
    let y = settings.beam_y;

    let members = vec![GraphicMember {
        id: "main-beam".to_string(),
        start: ScenePoint::new(0.0, y),
        end: ScenePoint::new(model.length, y),
        kind: MemberKind::Beam,
    }];

    let ordered = model.ordered_supports();
    let supports = ordered
        .iter()
        .map(|s| GraphicSupport {
            id: s.id.clone(),
            position: ScenePoint::new(s.position, y),
            kind: s.kind,
        })
        .collect();

    let point_loads = model.point_loads.iter().map(|load| GraphicLoad {
        id: load.id.clone(),
        position: ScenePoint::new(load.position, y),
        kind: GraphicLoadKind::Point,
        magnitude: load.magnitude,
        direction: load.direction,
        length: None,
        end_magnitude: None,
        unit: Unit::KiloNewton,
    });
    let distributed_loads = model.distributed_loads.iter().map(|load| GraphicLoad {
        id: load.id.clone(),
        position: ScenePoint::new(load.start, y),
        kind: GraphicLoadKind::Distributed,
        magnitude: load.magnitude_start,
        direction: load.direction,
        length: Some(load.length()),
        end_magnitude: Some(load.magnitude_end),
        unit: Unit::KiloNewtonPerMeter,
    });
    let loads = point_loads.chain(distributed_loads).collect();

    let reactions = result
        .reactions
        .iter()
        .map(|r| GraphicReaction {
            id: format!("reaction-{}", r.support_id),
            position: ScenePoint::new(r.position, y),
            kind: r.kind,
            magnitude: r.magnitude,
            direction: r.direction,
            unit: Unit::KiloNewton,
        })
        .collect();

    let mut labels = vec![SceneLabel {
        id: "span-length".to_string(),
        position: ScenePoint::new(model.length / 2.0, y + settings.span_label_offset),
        text: format!("L = {:.2} {}", model.length, Unit::Meter),
    }];
    labels.extend(ordered.iter().enumerate().map(|(index, s)| SceneLabel {
        id: format!("label-{}", s.id),
        position: ScenePoint::new(s.position, y + settings.support_label_offset),
        text: support_letter(index),
    }));

    GraphicScene {
        scale: settings.scale,
        members,
        supports,
        loads,
        reactions,
        diagrams: Vec::new(),
        labels,
    }
}

fn diagram_scene(length: f64, result: &ResultView, settings: &SceneSettings) -> GraphicScene {
    let diagrams = vec![
        GraphicDiagram {
            id: "shear-diagram".to_string(),
            kind: DiagramKind::Shear,
            points: diagram_points(&result.shear_segments, settings),
            y_offset: settings.shear_offset,
        },
        GraphicDiagram {
            id: "moment-diagram".to_string(),
            kind: DiagramKind::Moment,
            points: diagram_points(&result.moment_segments, settings),
            y_offset: settings.moment_offset,
        },
    ];

    let labels = vec![
        SceneLabel {
            id: "shear-title".to_string(),
            position: ScenePoint::new(length / 2.0, SHEAR_TITLE_Y),
            text: "Shear Force Diagram V(x)".to_string(),
        },
        SceneLabel {
            id: "moment-title".to_string(),
            position: ScenePoint::new(length / 2.0, MOMENT_TITLE_Y),
            text: "Bending Moment Diagram M(x)".to_string(),
        },
    ];

    GraphicScene {
        diagrams,
        labels,
        ..GraphicScene::empty(settings.scale)
    }
}

/// Flatten segment samples into scene points, negated and scaled down
fn diagram_points(segments: &[DiagramSegment], settings: &SceneSettings) -> Vec<ScenePoint> {
    let divisor = if settings.diagram_value_scale != 0.0 {
        settings.diagram_value_scale
    } else {
        1.0
    };

    segments
        .iter()
        .flat_map(|segment| segment.points.iter())
        .map(|p| ScenePoint::new(p.x, -p.value / divisor))
        .collect()
}
