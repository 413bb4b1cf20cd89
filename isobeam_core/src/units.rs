//! # Units
//!
//! Isobeam works in a single consistent metric unit set. Values are plain
//! `f64` throughout the model; this module names the units so that equation
//! strings, scene quantities and reports all print the same symbols.
//!
//! - Length: metres (m)
//! - Force: kilonewtons (kN)
//! - Distributed load: kilonewtons per metre (kN/m)
//! - Moment: kilonewton-metres (kN·m)
//!
//! ## Example
//!
//! ```rust
//! use isobeam_core::units::{fmt_num, round_to, Unit};
//!
//! assert_eq!(Unit::KiloNewtonMeter.symbol(), "kN·m");
//! assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
//! assert_eq!(fmt_num(5.0, 3), "5");
//! ```

use serde::{Deserialize, Serialize};

/// Number of decimals used for display strings unless configured otherwise
pub const DEFAULT_DECIMALS: u32 = 3;

/// Most decimals a value is ever rounded to
pub const MAX_DECIMALS: u32 = 12;

/// Physical unit of a quantity in the model.
///
/// Serialized as its display symbol (`"kN"`, `"kN/m"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Length in metres
    #[serde(rename = "m")]
    Meter,
    /// Force in kilonewtons
    #[serde(rename = "kN")]
    KiloNewton,
    /// Line load in kilonewtons per metre
    #[serde(rename = "kN/m")]
    KiloNewtonPerMeter,
    /// Moment in kilonewton-metres
    #[serde(rename = "kN·m")]
    KiloNewtonMeter,
}

impl Unit {
    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::KiloNewton => "kN",
            Unit::KiloNewtonPerMeter => "kN/m",
            Unit::KiloNewtonMeter => "kN·m",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Round to a fixed number of decimals, half away from zero.
///
/// `decimals` is capped at [`MAX_DECIMALS`]. Negative zero is folded to
/// `0.0` so it never prints as `-0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a rounded number without trailing zeros (`5`, `2.5`, `0.333`)
pub fn fmt_num(value: f64, decimals: u32) -> String {
    format!("{}", round_to(value, decimals))
}

/// Render a value followed by its unit symbol (`10 kN`)
pub fn fmt_quantity(value: f64, unit: Unit, decimals: u32) -> String {
    format!("{} {}", fmt_num(value, decimals), unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(-1.23449, 3), -1.234);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_huge_decimal_count_stays_finite() {
        assert_eq!(round_to(2.5, 400), 2.5);
        assert_eq!(fmt_num(1.0 / 3.0, u32::MAX), "0.333333333333");
    }

    #[test]
    fn test_negative_zero_is_folded() {
        let value = round_to(-0.0001, 3);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
        assert_eq!(fmt_num(-0.0001, 3), "0");
    }

    #[test]
    fn test_fmt_num_drops_trailing_zeros() {
        assert_eq!(fmt_num(5.0, 3), "5");
        assert_eq!(fmt_num(2.5, 3), "2.5");
        assert_eq!(fmt_num(1.0 / 3.0, 3), "0.333");
        assert_eq!(fmt_num(-15.0, 3), "-15");
    }

    #[test]
    fn test_fmt_quantity() {
        assert_eq!(fmt_quantity(10.0, Unit::KiloNewton, 3), "10 kN");
        assert_eq!(fmt_quantity(5.0, Unit::KiloNewtonPerMeter, 3), "5 kN/m");
    }

    #[test]
    fn test_serializes_as_symbol() {
        for unit in [Unit::Meter, Unit::KiloNewton, Unit::KiloNewtonPerMeter, Unit::KiloNewtonMeter] {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.symbol()));
            assert_eq!(serde_json::from_str::<Unit>(&json).unwrap(), unit);
        }
    }
}
