//! Shear and moment diagrams
//!
//! Both diagrams are piecewise: the beam is cut at every load and support
//! position, shear is constant on each piece, and moment is its running
//! integral, so it is linear on each piece and continuous across cuts.
//!
//! ## Sign Convention
//! - Positive shear: net upward force on the part of the beam left of the cut
//! - Positive moment: sagging (tension on the bottom fibre)

use serde::{Deserialize, Serialize};

use super::equilibrium::Reaction;
use crate::loads::PointLoad;
use crate::settings::{AnalysisSettings, MIN_SAMPLES};
use crate::units::{fmt_num, Unit};

/// One sample of a diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Position along the beam (m)
    pub x: f64,
    /// Diagram value at `x` (kN or kN·m)
    pub value: f64,
}

/// A piece of a diagram between two consecutive cut positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSegment {
    /// Start position (m)
    pub start: f64,

    /// End position (m)
    pub end: f64,

    /// Human-readable equation valid on this segment
    pub equation: String,

    /// Polyline from `start` to `end`, first and last points exactly on the ends
    pub points: Vec<DiagramPoint>,
}

impl DiagramSegment {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Value at the start of the segment
    pub fn start_value(&self) -> f64 {
        self.points.first().map(|p| p.value).unwrap_or(0.0)
    }

    /// Value at the end of the segment
    pub fn end_value(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(0.0)
    }

    /// Whether `x` lies within `[start, end]`
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }

    /// Linear interpolation between the end values, clamped to the segment
    pub fn value_at(&self, x: f64) -> f64 {
        let length = self.length();
        if length <= 0.0 {
            return self.start_value();
        }
        let t = ((x - self.start) / length).clamp(0.0, 1.0);
        self.start_value() + (self.end_value() - self.start_value()) * t
    }
}

/// Evaluate a piecewise diagram at `x`.
///
/// At a cut the segment starting there wins, so shear reads the value just
/// right of a jump. Returns `None` outside the diagram.
pub fn value_at(segments: &[DiagramSegment], x: f64) -> Option<f64> {
    segments
        .iter()
        .find(|s| x >= s.start && x < s.end)
        .or_else(|| segments.last().filter(|s| s.contains(x)))
        .or_else(|| segments.first().filter(|s| s.contains(x)))
        .map(|s| s.value_at(x))
}

/// Evenly spaced samples of a straight line from `(start, v0)` to `(end, v1)`.
///
/// The last sample is written from the inputs directly so that adjoining
/// segments share exact end values.
pub fn sample_linear(start: f64, end: f64, v0: f64, v1: f64, samples: usize) -> Vec<DiagramPoint> {
    let samples = samples.max(MIN_SAMPLES);
    let last = samples - 1;
    let mut points: Vec<DiagramPoint> = (0..last)
        .map(|i| {
            let t = i as f64 / last as f64;
            DiagramPoint {
                x: start + (end - start) * t,
                value: v0 + (v1 - v0) * t,
            }
        })
        .collect();
    points.push(DiagramPoint { x: end, value: v1 });
    points
}

/// Positions where the shear can change: both beam ends, every load and
/// every reaction. Sorted ascending without duplicates.
pub fn cut_positions(length: f64, loads: &[PointLoad], reactions: &[Reaction]) -> Vec<f64> {
    let mut positions = Vec::with_capacity(loads.len() + reactions.len() + 2);
    positions.push(0.0);
    positions.extend(loads.iter().map(|l| l.position));
    positions.extend(reactions.iter().map(|r| r.position));
    positions.push(length);

    positions.sort_by(|a, b| a.total_cmp(b));
    positions.dedup();
    positions
}

/// Build the shear diagram V(x) over `[0, length]`.
///
/// On each piece the shear is the signed sum of every reaction and load at
/// or left of the piece start: upward forces add, downward forces subtract.
pub fn build_shear(
    length: f64,
    loads: &[PointLoad],
    reactions: &[Reaction],
    settings: &AnalysisSettings,
) -> Vec<DiagramSegment> {
    let positions = cut_positions(length, loads, reactions);
    let decimals = settings.decimals();

    positions
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);

            let from_reactions: f64 = reactions
                .iter()
                .filter(|r| r.position <= start)
                .map(Reaction::signed_value)
                .sum();
            let from_loads: f64 = loads
                .iter()
                .filter(|l| l.position <= start)
                .map(|l| l.direction.sign() * l.magnitude)
                .sum();
            let shear = from_reactions + from_loads;

            DiagramSegment {
                start,
                end,
                equation: format!("V = {} {}", fmt_num(shear, decimals), Unit::KiloNewton),
                points: sample_linear(start, end, shear, shear, settings.shear_sample_count()),
            }
        })
        .collect()
}

/// Build the moment diagram M(x) by integrating the shear segments.
///
/// Moment starts at zero at the left end and each piece rises linearly by
/// `V·ℓ`. A piece's end value is reused as the next piece's start value.
pub fn build_moment(shear: &[DiagramSegment], settings: &AnalysisSettings) -> Vec<DiagramSegment> {
    let decimals = settings.decimals();
    let mut running = 0.0;

    shear
        .iter()
        .map(|segment| {
            let v = segment.start_value();
            let m0 = running;
            let m1 = m0 + v * segment.length();
            running = m1;

            DiagramSegment {
                start: segment.start,
                end: segment.end,
                equation: format!(
                    "M = {} + {} × (x - {})",
                    fmt_num(m0, decimals),
                    fmt_num(v, decimals),
                    fmt_num(segment.start, decimals)
                ),
                points: sample_linear(segment.start, segment.end, m0, m1, settings.moment_sample_count()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Support;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn symmetric_case() -> (Vec<PointLoad>, Vec<Reaction>) {
        let loads = vec![PointLoad::down("P1", 3.0, 10.0)];
        let reactions = vec![
            Reaction::vertical(&Support::simple("A", 0.0), 5.0),
            Reaction::vertical(&Support::roller("B", 6.0), 5.0),
        ];
        (loads, reactions)
    }

    #[test]
    fn test_sample_linear_endpoints() {
        let points = sample_linear(1.0, 3.0, 0.0, 10.0, 5);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], DiagramPoint { x: 1.0, value: 0.0 });
        assert_eq!(points[4], DiagramPoint { x: 3.0, value: 10.0 });
        assert_relative_eq!(points[2].value, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_linear_zero_length() {
        let points = sample_linear(2.0, 2.0, 4.0, 4.0, 20);
        assert!(points.iter().all(|p| p.x == 2.0 && p.value == 4.0));
    }

    #[test]
    fn test_cut_positions_are_sorted_and_unique() {
        let (loads, reactions) = symmetric_case();
        assert_eq!(cut_positions(6.0, &loads, &reactions), vec![0.0, 3.0, 6.0]);
    }

    #[test]
    fn test_shear_step_function() {
        let (loads, reactions) = symmetric_case();
        let shear = build_shear(6.0, &loads, &reactions, &AnalysisSettings::default());

        assert_eq!(shear.len(), 2);
        assert_eq!(shear[0].start_value(), 5.0);
        assert_eq!(shear[0].end_value(), 5.0);
        assert_eq!(shear[1].start_value(), -5.0);
        assert_eq!(shear[0].equation, "V = 5 kN");
        assert_eq!(shear[1].equation, "V = -5 kN");
        assert_eq!(shear[0].points.len(), 5);
    }

    #[test]
    fn test_shear_covers_span_without_gaps() {
        let loads = vec![PointLoad::down("P1", 1.5, 4.0), PointLoad::down("P2", 4.0, 6.0)];
        let reactions = vec![
            Reaction::vertical(&Support::simple("A", 0.0), 5.0),
            Reaction::vertical(&Support::roller("B", 6.0), 5.0),
        ];
        let shear = build_shear(6.0, &loads, &reactions, &AnalysisSettings::default());

        assert_eq!(shear.first().unwrap().start, 0.0);
        assert_eq!(shear.last().unwrap().end, 6.0);
        for pair in shear.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_moment_integration() {
        let (loads, reactions) = symmetric_case();
        let settings = AnalysisSettings::default();
        let shear = build_shear(6.0, &loads, &reactions, &settings);
        let moment = build_moment(&shear, &settings);

        assert_eq!(moment.len(), 2);
        assert_eq!(moment[0].start_value(), 0.0);
        assert_relative_eq!(moment[0].end_value(), 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moment[1].end_value(), 0.0, epsilon = 1e-12);
        assert_eq!(moment[0].points.len(), 20);
        assert_eq!(moment[1].equation, "M = 15 + -5 × (x - 3)");
    }

    #[test]
    fn test_moment_is_continuous() {
        let loads = vec![PointLoad::down("P1", 1.0, 3.3), PointLoad::up("P2", 2.7, 1.1)];
        let reactions = vec![
            Reaction::vertical(&Support::simple("A", 0.0), 1.7),
            Reaction::vertical(&Support::roller("B", 6.0), 0.5),
        ];
        let settings = AnalysisSettings::default();
        let moment = build_moment(&build_shear(6.0, &loads, &reactions, &settings), &settings);

        for pair in moment.windows(2) {
            assert_eq!(pair[0].end_value(), pair[1].start_value());
        }
    }

    #[test]
    fn test_value_at() {
        let (loads, reactions) = symmetric_case();
        let settings = AnalysisSettings::default();
        let shear = build_shear(6.0, &loads, &reactions, &settings);
        let moment = build_moment(&shear, &settings);

        // Right of the jump at x = 3
        assert_eq!(value_at(&shear, 3.0), Some(-5.0));
        assert_eq!(value_at(&shear, 6.0), Some(-5.0));
        assert_relative_eq!(value_at(&moment, 1.5).unwrap(), 7.5, epsilon = 1e-12);
        assert_eq!(value_at(&moment, 7.0), None);
    }
}
