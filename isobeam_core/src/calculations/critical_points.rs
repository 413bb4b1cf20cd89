//! Critical points of a piecewise-linear diagram
//!
//! - **Zero**: a segment whose end values straddle zero crosses it once;
//!   the crossing is found by linear interpolation.
//! - **Discontinuity**: a segment starting at a non-zero value marks a jump
//!   (or a non-zero start) at its left end.
//! - **Maximum / minimum**: the largest and smallest values of the whole
//!   diagram, reported separately by [`find_extrema`].

use serde::{Deserialize, Serialize};

use super::diagrams::DiagramSegment;
use crate::units::{fmt_num, Unit};

/// Which diagram a set of critical points belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    Shear,
    Moment,
}

impl DiagramKind {
    /// Lowercase name used in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            DiagramKind::Shear => "shear",
            DiagramKind::Moment => "moment",
        }
    }
}

impl std::fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriticalPointKind {
    Zero,
    Discontinuity,
    Maximum,
    Minimum,
}

/// A notable position on a diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPoint {
    /// Position along the beam (m)
    pub position: f64,

    /// Diagram value at that position
    pub value: f64,

    pub kind: CriticalPointKind,

    /// Human-readable summary, e.g. `shear = 0 at x = 3 m`
    pub description: String,
}

impl CriticalPoint {
    fn new(kind: CriticalPointKind, position: f64, value: f64, diagram: DiagramKind, decimals: u32) -> Self {
        let prefix = match kind {
            CriticalPointKind::Maximum => "max ",
            CriticalPointKind::Minimum => "min ",
            CriticalPointKind::Zero | CriticalPointKind::Discontinuity => "",
        };
        CriticalPoint {
            position,
            value,
            kind,
            description: format!(
                "{prefix}{} = {} at x = {} {}",
                diagram.label(),
                fmt_num(value, decimals),
                fmt_num(position, decimals),
                Unit::Meter
            ),
        }
    }
}

/// Zero crossing of the straight line through the segment ends, if any.
///
/// A crossing exists when the end values have opposite signs or exactly one
/// of them is zero. A segment that is zero throughout has no single
/// crossing and yields nothing.
pub fn linear_zero(start: f64, end: f64, v0: f64, v1: f64) -> Option<f64> {
    if v0 * v1 > 0.0 || v0 == v1 {
        return None;
    }
    let length = end - start;
    if length <= 0.0 {
        return None;
    }
    let slope = (v1 - v0) / length;
    let x = start - v0 / slope;
    (x >= start && x <= end).then_some(x)
}

/// Scan segments for zero crossings and discontinuities.
///
/// Points are emitted per segment in order: the zero (if any), then the
/// discontinuity at the segment start when `|start value| > tolerance`.
pub fn find_critical_points(
    segments: &[DiagramSegment],
    diagram: DiagramKind,
    tolerance: f64,
    decimals: u32,
) -> Vec<CriticalPoint> {
    let mut points = Vec::new();

    for segment in segments {
        let v0 = segment.start_value();
        let v1 = segment.end_value();

        if let Some(x) = linear_zero(segment.start, segment.end, v0, v1) {
            points.push(CriticalPoint::new(CriticalPointKind::Zero, x, 0.0, diagram, decimals));
        }

        if v0.abs() > tolerance {
            points.push(CriticalPoint::new(
                CriticalPointKind::Discontinuity,
                segment.start,
                v0,
                diagram,
                decimals,
            ));
        }
    }

    points
}

/// Largest and smallest diagram values.
///
/// Diagrams are linear per segment, so only segment ends need checking.
/// The maximum is reported only if it exceeds `tolerance`, the minimum only
/// if it is below `-tolerance`. Ties keep the leftmost position.
pub fn find_extrema(
    segments: &[DiagramSegment],
    diagram: DiagramKind,
    tolerance: f64,
    decimals: u32,
) -> Vec<CriticalPoint> {
    let ends = segments.iter().flat_map(|s| {
        [(s.start, s.start_value()), (s.end, s.end_value())]
    });

    let mut max: Option<(f64, f64)> = None;
    let mut min: Option<(f64, f64)> = None;
    for (x, value) in ends {
        if max.map_or(true, |(_, m)| value > m) {
            max = Some((x, value));
        }
        if min.map_or(true, |(_, m)| value < m) {
            min = Some((x, value));
        }
    }

    let mut points = Vec::new();
    if let Some((x, value)) = max.filter(|(_, v)| *v > tolerance) {
        points.push(CriticalPoint::new(CriticalPointKind::Maximum, x, value, diagram, decimals));
    }
    if let Some((x, value)) = min.filter(|(_, v)| *v < -tolerance) {
        points.push(CriticalPoint::new(CriticalPointKind::Minimum, x, value, diagram, decimals));
    }
    points
}
