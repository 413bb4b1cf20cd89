//! Isostatic beam solver
//!
//! Runs the whole analysis in order and assembles a [`ResultView`]:
//!
//! 1. validate the structure
//! 2. reduce distributed loads to equivalent point loads
//! 3. solve the two support reactions
//! 4. build the shear diagram
//! 5. integrate it into the moment diagram
//! 6. extract critical points of both diagrams
//!
//! An invalid beam never panics or returns `Err`: the result comes back with
//! `is_valid == false`, the reasons in `errors`, and empty reaction and
//! diagram lists.
//!
//! ## Example
//! ```rust
//! use isobeam_core::calculations::solve;
//! use isobeam_core::model::{BeamModel, Support};
//! use isobeam_core::loads::PointLoad;
//!
//! let beam = BeamModel::new("V-1", 6.0)
//!     .with_support(Support::simple("A", 0.0))
//!     .with_support(Support::roller("B", 6.0))
//!     .with_point_load(PointLoad::down("P1", 2.0, 12.0));
//!
//! let result = solve(&beam);
//! assert!(result.is_valid);
//! assert_eq!(result.reactions[0].magnitude, 8.0);
//! assert_eq!(result.reactions[1].magnitude, 4.0);
//! ```

use serde::{Deserialize, Serialize};

use super::critical_points::{find_critical_points, find_extrema, CriticalPoint, DiagramKind};
use super::diagrams::{self, build_moment, build_shear, DiagramSegment};
use super::equilibrium::{solve_reactions, EquilibriumSolution, Reaction};
use super::steps::{CalculationStep, StepLog};
use crate::errors::BeamError;
use crate::loads::PointLoad;
use crate::model::{BeamModel, REQUIRED_SUPPORTS, VERTICAL_EQUATIONS};
use crate::settings::AnalysisSettings;
use crate::units::{fmt_num, fmt_quantity, Unit};

/// Complete outcome of one solve.
///
/// Built once per call and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultView {
    /// Support reactions, left to right
    pub reactions: Vec<Reaction>,

    /// Point loads used by the solver: the model's own plus the equivalents
    /// of its distributed loads
    pub equivalent_loads: Vec<PointLoad>,

    /// Shear diagram V(x), ordered and contiguous
    pub shear_segments: Vec<DiagramSegment>,

    /// Moment diagram M(x), ordered and contiguous
    pub moment_segments: Vec<DiagramSegment>,

    /// Zero crossings and discontinuities of V(x)
    pub shear_critical_points: Vec<CriticalPoint>,

    /// Zero crossings and discontinuities of M(x)
    pub moment_critical_points: Vec<CriticalPoint>,

    /// Maximum / minimum of V(x)
    pub shear_extrema: Vec<CriticalPoint>,

    /// Maximum / minimum of M(x)
    pub moment_extrema: Vec<CriticalPoint>,

    /// Calculation procedure, in order
    pub steps: Vec<CalculationStep>,

    /// Whether the beam could be solved
    pub is_valid: bool,

    /// Why the beam could not be solved (empty when valid)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BeamError>,
}

impl ResultView {
    /// Result for a beam that could not be solved
    fn invalid(steps: Vec<CalculationStep>, errors: Vec<BeamError>) -> Self {
        ResultView {
            reactions: Vec::new(),
            equivalent_loads: Vec::new(),
            shear_segments: Vec::new(),
            moment_segments: Vec::new(),
            shear_critical_points: Vec::new(),
            moment_critical_points: Vec::new(),
            shear_extrema: Vec::new(),
            moment_extrema: Vec::new(),
            steps,
            is_valid: false,
            errors,
        }
    }

    /// Shear at `x`, taken just right of any jump
    pub fn shear_at(&self, x: f64) -> Option<f64> {
        diagrams::value_at(&self.shear_segments, x)
    }

    /// Bending moment at `x`
    pub fn moment_at(&self, x: f64) -> Option<f64> {
        diagrams::value_at(&self.moment_segments, x)
    }

    /// Extreme moment with the largest magnitude, sagging or hogging
    pub fn max_moment(&self) -> Option<&CriticalPoint> {
        self.moment_extrema
            .iter()
            .max_by(|a, b| a.value.abs().total_cmp(&b.value.abs()))
    }

    /// Reaction provided by the given support
    pub fn reaction_for(&self, support_id: &str) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.support_id == support_id)
    }

    /// Sum of reactions (upward) minus sum of loads (downward); zero at equilibrium
    pub fn force_residual(&self) -> f64 {
        let reactions: f64 = self.reactions.iter().map(Reaction::signed_value).sum();
        let loads: f64 = self.equivalent_loads.iter().map(PointLoad::downward_force).sum();
        reactions - loads
    }

    /// Net moment of all loads and reactions about `pivot`; zero at equilibrium
    pub fn moment_residual(&self, pivot: f64) -> f64 {
        let reactions: f64 = self
            .reactions
            .iter()
            .map(|r| r.signed_value() * (r.position - pivot))
            .sum();
        let loads: f64 = self.equivalent_loads.iter().map(|l| l.moment_about(pivot)).sum();
        reactions + loads
    }
}

/// Solve a beam with default settings
pub fn solve(model: &BeamModel) -> ResultView {
    solve_with(model, &AnalysisSettings::default())
}

/// Solve a beam with explicit analysis settings
#[tracing::instrument(skip_all, fields(beam = %model.id))]
pub fn solve_with(model: &BeamModel, settings: &AnalysisSettings) -> ResultView {
    let decimals = settings.decimals();
    let mut log = StepLog::new();

    let errors = model.validate();
    let validation = CalculationStep::new("Structure validation", "Check that the beam is statically determinate")
        .with_equation(format!("Unknown reactions ≤ {VERTICAL_EQUATIONS} equations (∑Fy, ∑M)"))
        .with_calculation(format!(
            "Supports: {}, Unknown reactions: {}, Length: {}",
            model.supports.len(),
            model.unknown_reactions(),
            fmt_quantity(model.length, Unit::Meter, decimals)
        ));
    if !errors.is_empty() {
        tracing::warn!(error_count = errors.len(), "beam rejected");
        log.push(validation.with_result(format!("✗ {} problem(s) found", errors.len())));
        return ResultView::invalid(log.finish(), errors);
    }
    log.push(validation.with_result("✓ Valid for isostatic analysis"));

    let equivalent_loads = match normalize_loads(model, &mut log, decimals) {
        Ok(loads) => loads,
        Err(err) => return ResultView::invalid(log.finish(), vec![err]),
    };

    let supports = model.ordered_supports();
    let (left, right) = match supports.as_slice() {
        [left, right] => (*left, *right),
        _ => {
            let err = BeamError::support_count(supports.len(), REQUIRED_SUPPORTS);
            return ResultView::invalid(log.finish(), vec![err]);
        }
    };

    let solution = match solve_reactions(left, right, &equivalent_loads) {
        Ok(solution) => solution,
        Err(err) => return ResultView::invalid(log.finish(), vec![err]),
    };
    log_reactions(&solution, &mut log, decimals);
    let reactions = solution.reactions();

    let shear_segments = build_shear(model.length, &equivalent_loads, &reactions, settings);
    log.push(
        CalculationStep::new("Shear force diagram V(x)", "Compute the shear on each beam segment")
            .with_result(format!("{} segment(s)", shear_segments.len())),
    );

    let moment_segments = build_moment(&shear_segments, settings);
    log.push(
        CalculationStep::new("Bending moment diagram M(x)", "Integrate the shear force to obtain the moment")
            .with_equation("M(x) = M0 + V × (x - x0)")
            .with_result(format!("{} segment(s)", moment_segments.len())),
    );
    tracing::debug!(
        shear_segments = shear_segments.len(),
        moment_segments = moment_segments.len(),
        "built diagrams"
    );

    let tolerance = settings.zero_tolerance;
    let shear_critical_points = find_critical_points(&shear_segments, DiagramKind::Shear, tolerance, decimals);
    let moment_critical_points = find_critical_points(&moment_segments, DiagramKind::Moment, tolerance, decimals);
    let shear_extrema = find_extrema(&shear_segments, DiagramKind::Shear, tolerance, decimals);
    let moment_extrema = find_extrema(&moment_segments, DiagramKind::Moment, tolerance, decimals);

    let mut critical = CalculationStep::new("Critical points", "Locate zeros, jumps and extreme values of V(x) and M(x)")
        .with_calculation(format!(
            "{} shear point(s), {} moment point(s)",
            shear_critical_points.len(),
            moment_critical_points.len()
        ));
    if let Some(peak) = moment_extrema.iter().max_by(|a, b| a.value.abs().total_cmp(&b.value.abs())) {
        critical = critical.with_result(format!(
            "|M|max = {} at x = {}",
            fmt_quantity(peak.value.abs(), Unit::KiloNewtonMeter, decimals),
            fmt_quantity(peak.position, Unit::Meter, decimals)
        ));
    }
    log.push(critical);

    ResultView {
        reactions,
        equivalent_loads,
        shear_segments,
        moment_segments,
        shear_critical_points,
        moment_critical_points,
        shear_extrema,
        moment_extrema,
        steps: log.finish(),
        is_valid: true,
        errors: Vec::new(),
    }
}

/// Model point loads followed by the equivalents of its distributed loads
fn normalize_loads(model: &BeamModel, log: &mut StepLog, decimals: u32) -> Result<Vec<PointLoad>, BeamError> {
    let mut loads = model.point_loads.clone();
    if model.distributed_loads.is_empty() {
        return Ok(loads);
    }

    log.push(CalculationStep::new(
        "Distributed load conversion",
        "Replace distributed loads with equivalent point loads",
    ));

    for distributed in &model.distributed_loads {
        let equivalent = distributed.equivalent_point_load()?;
        log.push(
            CalculationStep::new(
                format!("Distributed load {}", distributed.id),
                "Resultant and centroid",
            )
            .with_equation("P = (w1 + w2) / 2 × L")
            .with_calculation(format!(
                "P = ({} + {}) / 2 × {} = {}",
                fmt_num(distributed.magnitude_start, decimals),
                fmt_num(distributed.magnitude_end, decimals),
                fmt_num(distributed.length(), decimals),
                fmt_quantity(equivalent.magnitude, Unit::KiloNewton, decimals)
            ))
            .with_result(format!(
                "Resultant at x = {}",
                fmt_quantity(equivalent.position, Unit::Meter, decimals)
            )),
        );
        loads.push(equivalent);
    }

    tracing::debug!(count = model.distributed_loads.len(), "normalized distributed loads");
    Ok(loads)
}

fn log_reactions(solution: &EquilibriumSolution, log: &mut StepLog, decimals: u32) {
    log.push(
        CalculationStep::new("Support reactions", "Apply the equations of static equilibrium")
            .with_equation("∑Fy = 0, ∑MA = 0"),
    );
    log.push(
        CalculationStep::new("Moment equilibrium about A", "Sum of moments about the left support")
            .with_equation("∑MA = 0")
            .with_calculation(format!(
                "RB × {} + ({}) = 0",
                fmt_num(solution.support_spacing, decimals),
                fmt_num(solution.moment_about_left, decimals)
            ))
            .with_result(format!(
                "RB = {}",
                fmt_quantity(solution.right_value, Unit::KiloNewton, decimals)
            )),
    );
    log.push(
        CalculationStep::new("Vertical force equilibrium", "Sum of vertical forces")
            .with_equation("∑Fy = 0")
            .with_calculation(format!(
                "RA + {} - {} = 0",
                fmt_num(solution.right_value, decimals),
                fmt_num(solution.total_load, decimals)
            ))
            .with_result(format!(
                "RA = {}",
                fmt_quantity(solution.left_value, Unit::KiloNewton, decimals)
            )),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{Direction, DistributedLoad};
    use crate::model::Support;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn simply_supported() -> BeamModel {
        BeamModel::new("V-1", 6.0)
            .with_support(Support::simple("A", 0.0))
            .with_support(Support::roller("B", 6.0))
    }

    #[test]
    fn test_symmetric_point_load() {
        let result = solve(&simply_supported().with_point_load(PointLoad::down("P1", 3.0, 10.0)));

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_relative_eq!(result.reactions[0].magnitude, 5.0, epsilon = 1e-9);
        assert_relative_eq!(result.reactions[1].magnitude, 5.0, epsilon = 1e-9);
        assert_eq!(result.reactions[0].direction, Direction::Up);

        let peak = result.max_moment().unwrap();
        assert_relative_eq!(peak.value, 15.0, epsilon = 1e-9);
        assert_eq!(peak.position, 3.0);
        assert_abs_diff_eq!(result.moment_at(0.0).unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.moment_at(6.0).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_steps_are_sequential() {
        let beam = simply_supported()
            .with_point_load(PointLoad::down("P1", 3.0, 10.0))
            .with_distributed_load(DistributedLoad::uniform("W1", 1.0, 3.0, 5.0));
        let result = solve(&beam);

        let numbers: Vec<usize> = result.steps.iter().map(|s| s.number).collect();
        let expected: Vec<usize> = (1..=result.steps.len()).collect();
        assert_eq!(numbers, expected);

        let titles: Vec<&str> = result.steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Structure validation",
                "Distributed load conversion",
                "Distributed load W1",
                "Support reactions",
                "Moment equilibrium about A",
                "Vertical force equilibrium",
                "Shear force diagram V(x)",
                "Bending moment diagram M(x)",
                "Critical points",
            ]
        );
        assert_eq!(
            result.steps[2].calculation.as_deref(),
            Some("P = (5 + 5) / 2 × 2 = 10 kN")
        );
    }

    #[test]
    fn test_invalid_result_is_empty() {
        let beam = BeamModel::new("V-1", 6.0).with_support(Support::simple("A", 0.0));
        let result = solve(&beam);

        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![BeamError::support_count(1, 2)]);
        assert!(result.reactions.is_empty());
        assert!(result.shear_segments.is_empty());
        assert!(result.moment_segments.is_empty());
        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].result.as_deref().unwrap().starts_with('✗'));
    }

    #[test]
    fn test_validation_step_counts_unknowns() {
        let beam = BeamModel::new("V-1", 6.0)
            .with_support(Support::fixed("A", 0.0))
            .with_support(Support::roller("B", 6.0));
        let result = solve(&beam);

        assert!(!result.is_valid);
        assert_eq!(
            result.steps[0].calculation.as_deref(),
            Some("Supports: 2, Unknown reactions: 3, Length: 6 m")
        );
        assert_eq!(
            solve(&simply_supported()).steps[0].calculation.as_deref(),
            Some("Supports: 2, Unknown reactions: 2, Length: 6 m")
        );
    }

    #[test]
    fn test_supports_listed_right_to_left() {
        let mut beam = simply_supported().with_point_load(PointLoad::down("P1", 2.0, 12.0));
        beam.supports.reverse();
        let result = solve(&beam);

        assert!(result.is_valid);
        assert_eq!(result.reactions[0].support_id, "A");
        assert_relative_eq!(result.reaction_for("A").unwrap().magnitude, 8.0, epsilon = 1e-9);
        assert_relative_eq!(result.reaction_for("B").unwrap().magnitude, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_magnitude_load_is_kept() {
        let result = solve(&simply_supported().with_point_load(PointLoad::down("P0", 2.0, 0.0)));

        assert!(result.is_valid);
        assert_eq!(result.equivalent_loads.len(), 1);
        assert!(result.shear_critical_points.is_empty());
        assert!(result.moment_extrema.is_empty());
    }

    #[test]
    fn test_residuals_vanish() {
        let beam = simply_supported()
            .with_point_load(PointLoad::down("P1", 1.2, 7.0))
            .with_point_load(PointLoad::up("P2", 4.4, 2.5))
            .with_distributed_load(DistributedLoad::linear("W1", 0.5, 5.0, 1.0, 3.0, Direction::Down));
        let result = solve(&beam);

        assert!(result.is_valid);
        assert_abs_diff_eq!(result.force_residual(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.moment_residual(0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.moment_residual(6.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_oversized_decimals_still_format_numbers() {
        let settings = AnalysisSettings {
            display_decimals: 400,
            ..Default::default()
        };
        let result = solve_with(&simply_supported().with_point_load(PointLoad::down("P1", 3.0, 10.0)), &settings);

        assert_eq!(result.shear_segments[0].equation, "V = 5 kN");
        assert!(result.steps.iter().all(|s| {
            let text = format!("{:?}{:?}", s.calculation, s.result);
            !text.contains("NaN") && !text.contains("inf")
        }));
    }

    #[test]
    fn test_custom_sample_counts() {
        let settings = AnalysisSettings {
            moment_samples: 7,
            shear_samples: 2,
            ..Default::default()
        };
        let result = solve_with(&simply_supported().with_point_load(PointLoad::down("P1", 3.0, 10.0)), &settings);

        assert!(result.moment_segments.iter().all(|s| s.points.len() == 7));
        assert!(result.shear_segments.iter().all(|s| s.points.len() == 2));
    }
}
