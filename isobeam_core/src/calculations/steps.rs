//! Calculation trace
//!
//! Each solve records the procedure it followed as numbered steps, so a
//! report can show how the reactions and diagrams were obtained. A
//! [`StepLog`] only ever appends; the finished list is moved into the
//! result and never touched again.

use serde::{Deserialize, Serialize};

/// One entry of the calculation procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// 1-based sequence number
    pub number: usize,

    pub title: String,

    pub description: String,

    /// Governing equation, e.g. `∑Fy = 0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,

    /// Equation with numbers substituted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl CalculationStep {
    /// Create a step with only a title and description.
    ///
    /// The number is assigned when the step is pushed onto a [`StepLog`].
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        CalculationStep {
            number: 0,
            title: title.into(),
            description: description.into(),
            equation: None,
            calculation: None,
            result: None,
        }
    }

    pub fn with_equation(mut self, equation: impl Into<String>) -> Self {
        self.equation = Some(equation.into());
        self
    }

    pub fn with_calculation(mut self, calculation: impl Into<String>) -> Self {
        self.calculation = Some(calculation.into());
        self
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }
}

/// Append-only, self-numbering list of calculation steps
#[derive(Debug, Default)]
pub struct StepLog {
    steps: Vec<CalculationStep>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the step and append it
    pub fn push(&mut self, mut step: CalculationStep) {
        step.number = self.steps.len() + 1;
        self.steps.push(step);
    }

    /// Consume the log, yielding the finished trace
    pub fn finish(self) -> Vec<CalculationStep> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_in_order() {
        let mut log = StepLog::new();
        log.push(CalculationStep::new("First", "a"));
        log.push(CalculationStep::new("Second", "b").with_equation("∑Fy = 0"));
        log.push(CalculationStep::new("Third", "c").with_result("RA = 5 kN"));

        let steps = log.finish();
        let numbers: Vec<usize> = steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(steps[1].equation.as_deref(), Some("∑Fy = 0"));
        assert_eq!(steps[2].result.as_deref(), Some("RA = 5 kN"));
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let mut log = StepLog::new();
        log.push(CalculationStep::new("Only title", "desc"));
        let json = serde_json::to_string(&log.finish()).unwrap();
        assert!(!json.contains("equation"));
        assert!(!json.contains("result"));
    }
}
