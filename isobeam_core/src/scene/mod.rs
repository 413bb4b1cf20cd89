//! # Graphic Scene
//!
//! A renderer-agnostic description of a solved beam: where the member,
//! supports, loads and reactions sit, what the diagrams look like, and which
//! labels go where. Coordinates are in model units (metres along the beam);
//! [`GraphicScene::scale`] tells the renderer how many drawing units make a
//! metre. Stroke widths, colours, fonts and canvas fitting are left to the
//! renderer.
//!
//! Scenes are always derived by [`project`] and never edited by hand.

mod projector;

use serde::{Deserialize, Serialize};

use crate::calculations::{DiagramKind, ReactionKind};
use crate::loads::Direction;
use crate::model::SupportKind;
use crate::units::Unit;

pub use projector::{project, project_with, support_letter, SceneBundle};

/// A point in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64) -> Self {
        ScenePoint { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Beam,
    Column,
    Bar,
}

/// A structural member drawn as a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicMember {
    pub id: String,
    pub start: ScenePoint,
    pub end: ScenePoint,
    pub kind: MemberKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicSupport {
    pub id: String,
    pub position: ScenePoint,
    pub kind: SupportKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicLoadKind {
    Point,
    Distributed,
}

/// A load marker.
///
/// Distributed loads are anchored at their start and carry their `length`
/// and `end_magnitude` so the renderer can draw the actual shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicLoad {
    pub id: String,
    pub position: ScenePoint,
    pub kind: GraphicLoadKind,
    /// Point force, or intensity at the start of a distributed load
    pub magnitude: f64,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_magnitude: Option<f64>,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicReaction {
    pub id: String,
    pub position: ScenePoint,
    pub kind: ReactionKind,
    pub magnitude: f64,
    pub direction: Direction,
    pub unit: Unit,
}

/// A diagram overlay: one polyline, shifted down by `y_offset` drawing units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicDiagram {
    pub id: String,
    pub kind: DiagramKind,
    pub points: Vec<ScenePoint>,
    pub y_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLabel {
    pub id: String,
    pub position: ScenePoint,
    pub text: String,
}

/// Complete description of one drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicScene {
    /// Drawing units per metre
    pub scale: f64,
    pub members: Vec<GraphicMember>,
    pub supports: Vec<GraphicSupport>,
    pub loads: Vec<GraphicLoad>,
    pub reactions: Vec<GraphicReaction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagrams: Vec<GraphicDiagram>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<SceneLabel>,
}

impl GraphicScene {
    /// A scene with nothing in it
    pub fn empty(scale: f64) -> Self {
        GraphicScene {
            scale,
            members: Vec::new(),
            supports: Vec::new(),
            loads: Vec::new(),
            reactions: Vec::new(),
            diagrams: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
            && self.supports.is_empty()
            && self.loads.is_empty()
            && self.reactions.is_empty()
            && self.diagrams.is_empty()
            && self.labels.is_empty()
    }

    /// Look up a label by id
    pub fn label(&self, id: &str) -> Option<&SceneLabel> {
        self.labels.iter().find(|l| l.id == id)
    }
}
