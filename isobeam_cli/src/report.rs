//! Plain-text report of a solved beam

use std::fmt::Write;

use isobeam_core::calculations::{CriticalPoint, CriticalPointKind};
use isobeam_core::units::{fmt_quantity, Unit, DEFAULT_DECIMALS};
use isobeam_core::ResultView;

const RULE: &str = "================================================";

/// Render a result as a human-readable report
#[must_use]
pub fn render(result: &ResultView) -> String {
    let mut out = String::new();
    write_report(&mut out, result).expect("writing to string cannot fail");
    out
}

fn write_report(out: &mut String, result: &ResultView) -> std::fmt::Result {
    writeln!(out, "Isostatic Beam Analysis")?;
    writeln!(out, "{RULE}")?;

    if !result.is_valid {
        writeln!(out, "Status: INVALID")?;
        writeln!(out)?;
        writeln!(out, "Errors:")?;
        for error in &result.errors {
            writeln!(out, "  [{}] {}", error.error_code(), error)?;
        }
        write_steps(out, result)?;
        return Ok(());
    }

    writeln!(out, "Status: valid")?;
    writeln!(out)?;

    writeln!(out, "Reactions:")?;
    for reaction in &result.reactions {
        writeln!(
            out,
            "  {} at x = {}: {} {}",
            reaction.support_id,
            fmt_quantity(reaction.position, Unit::Meter, DEFAULT_DECIMALS),
            fmt_quantity(reaction.magnitude, Unit::KiloNewton, DEFAULT_DECIMALS),
            reaction.direction
        )?;
    }
    writeln!(out)?;

    write_points(out, "Shear critical points:", &result.shear_critical_points)?;
    write_points(out, "Moment critical points:", &result.moment_critical_points)?;

    let extrema: Vec<CriticalPoint> = result
        .shear_extrema
        .iter()
        .chain(&result.moment_extrema)
        .cloned()
        .collect();
    write_points(out, "Extreme values:", &extrema)?;

    write_steps(out, result)
}

fn write_points(out: &mut String, heading: &str, points: &[CriticalPoint]) -> std::fmt::Result {
    writeln!(out, "{heading}")?;
    if points.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for point in points {
        let tag = match point.kind {
            CriticalPointKind::Zero => "zero",
            CriticalPointKind::Discontinuity => "jump",
            CriticalPointKind::Maximum => "max",
            CriticalPointKind::Minimum => "min",
        };
        writeln!(out, "  {tag:<5} {}", point.description)?;
    }
    writeln!(out)
}

fn write_steps(out: &mut String, result: &ResultView) -> std::fmt::Result {
    writeln!(out, "Calculation procedure:")?;
    for step in &result.steps {
        writeln!(out, "  {}. {}: {}", step.number, step.title, step.description)?;
        if let Some(equation) = &step.equation {
            writeln!(out, "     Equation:    {equation}")?;
        }
        if let Some(calculation) = &step.calculation {
            writeln!(out, "     Calculation: {calculation}")?;
        }
        if let Some(result) = &step.result {
            writeln!(out, "     Result:      {result}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use isobeam_core::{solve, BeamModel, PointLoad, Support};

    #[test]
    fn test_valid_report() {
        let beam = BeamModel::new("V-1", 6.0)
            .with_support(Support::simple("A", 0.0))
            .with_support(Support::roller("B", 6.0))
            .with_point_load(PointLoad::down("P1", 3.0, 10.0));
        let text = render(&solve(&beam));

        assert!(text.contains("Status: valid"));
        assert!(text.contains("A at x = 0 m: 5 kN up"));
        assert!(text.contains("B at x = 6 m: 5 kN up"));
        assert!(text.contains("max   max moment = 15 at x = 3 m"));
        assert!(text.contains("1. Structure validation"));
        assert!(text.contains("Result:      RB = 5 kN"));
    }

    #[test]
    fn test_invalid_report_lists_errors() {
        let beam = BeamModel::new("V-1", 6.0).with_support(Support::simple("A", 0.0));
        let text = render(&solve(&beam));

        assert!(text.contains("Status: INVALID"));
        assert!(text.contains("[SUPPORT_COUNT]"));
        assert!(!text.contains("Reactions:"));
    }
}
