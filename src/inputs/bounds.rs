//! Boundary clamping of calculator inputs to the published slider ranges
//!
//! Calculators never validate their inputs. Callers that accept values from outside the
//! UI (CLI, batch files, HTTP) clamp here first; every adjustment is reported as a
//! non-fatal [`ClampWarning`] rather than an error.

use log::warn;
use serde::{Deserialize, Serialize};

use super::{EstateInput, PuaInput, RopInput, TermInput};

/// Inclusive numeric range for one input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a value into the range; non-finite values fall back to the minimum
    pub fn apply(&self, value: f64) -> f64 {
        if !value.is_finite() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Published ranges for every calculator input
#[derive(Debug, Clone)]
pub struct InputBounds {
    pub age: FieldRange,
    pub coverage: FieldRange,
    pub mortgage_years_remaining: FieldRange,
    pub youngest_child_age: FieldRange,
    /// Term lengths offered for sale; requests snap to the nearest one
    pub term_years: Vec<i32>,
    pub base_premium: FieldRange,
    pub annual_pua: FieldRange,
    pub horizon_years: FieldRange,
    pub estate_value: FieldRange,
    pub state_tax_rate_pct: FieldRange,
    pub insurance_coverage: FieldRange,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            age: FieldRange::new(25.0, 60.0),
            coverage: FieldRange::new(100_000.0, 5_000_000.0),
            mortgage_years_remaining: FieldRange::new(0.0, 30.0),
            youngest_child_age: FieldRange::new(0.0, 25.0),
            term_years: vec![10, 15, 20, 25, 30],
            base_premium: FieldRange::new(1_000.0, 50_000.0),
            annual_pua: FieldRange::new(0.0, 50_000.0),
            horizon_years: FieldRange::new(1.0, 40.0),
            estate_value: FieldRange::new(1_000_000.0, 100_000_000.0),
            state_tax_rate_pct: FieldRange::new(0.0, 20.0),
            insurance_coverage: FieldRange::new(0.0, 100_000_000.0),
        }
    }
}

impl InputBounds {
    /// Nearest offered term length; ties go to the shorter term
    pub fn snap_term(&self, term_years: i32) -> i32 {
        self.term_years
            .iter()
            .copied()
            .min_by_key(|&offered| (offered.abs_diff(term_years), offered))
            .unwrap_or(term_years)
    }
}

/// A single input that was moved into range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampWarning {
    pub field: String,
    pub requested: f64,
    pub applied: f64,
}

/// An input after clamping, with the adjustments that were made
#[derive(Debug, Clone, PartialEq)]
pub struct Clamped<T> {
    pub input: T,
    pub warnings: Vec<ClampWarning>,
}

impl<T> Clamped<T> {
    pub fn is_adjusted(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Inputs that can be clamped to [`InputBounds`]
pub trait Clamp: Sized {
    fn clamp_to(&self, bounds: &InputBounds) -> Clamped<Self>;
}

/// Collects warnings while fields are clamped one by one
#[derive(Default)]
struct WarningLog {
    warnings: Vec<ClampWarning>,
}

impl WarningLog {
    fn float(&mut self, field: &str, value: f64, range: &FieldRange) -> f64 {
        let applied = range.apply(value);
        self.record(field, value, applied);
        applied
    }

    fn int(&mut self, field: &str, value: i32, range: &FieldRange) -> i32 {
        let applied = range.apply(value as f64) as i32;
        self.record(field, value as f64, applied as f64);
        applied
    }

    fn record(&mut self, field: &str, requested: f64, applied: f64) {
        // NaN never equals itself, so a NaN request is always reported
        if requested != applied {
            warn!("Clamped {} from {} to {}", field, requested, applied);
            self.warnings.push(ClampWarning {
                field: field.to_string(),
                requested,
                applied,
            });
        }
    }

    fn finish<T>(self, input: T) -> Clamped<T> {
        Clamped {
            input,
            warnings: self.warnings,
        }
    }
}

impl Clamp for TermInput {
    fn clamp_to(&self, bounds: &InputBounds) -> Clamped<Self> {
        let mut log = WarningLog::default();
        let input = TermInput {
            age: log.int("age", self.age, &bounds.age),
            coverage: log.float("coverage", self.coverage, &bounds.coverage),
            mortgage_years_remaining: log.int(
                "mortgageYearsRemaining",
                self.mortgage_years_remaining,
                &bounds.mortgage_years_remaining,
            ),
            youngest_child_age: log.int(
                "youngestChildAge",
                self.youngest_child_age,
                &bounds.youngest_child_age,
            ),
        };
        log.finish(input)
    }
}

impl Clamp for RopInput {
    fn clamp_to(&self, bounds: &InputBounds) -> Clamped<Self> {
        let mut log = WarningLog::default();
        let term_years = bounds.snap_term(self.term_years);
        log.record("termYears", self.term_years as f64, term_years as f64);

        let input = RopInput {
            coverage: log.float("coverage", self.coverage, &bounds.coverage),
            term_years,
            age: log.int("age", self.age, &bounds.age),
            gender: self.gender,
        };
        log.finish(input)
    }
}

impl Clamp for PuaInput {
    fn clamp_to(&self, bounds: &InputBounds) -> Clamped<Self> {
        let mut log = WarningLog::default();
        let horizon = bounds.horizon_years.apply(self.horizon_years as f64) as u32;
        log.record("horizonYears", self.horizon_years as f64, horizon as f64);

        let input = PuaInput {
            base_premium: log.float("basePremium", self.base_premium, &bounds.base_premium),
            annual_pua: log.float("annualPua", self.annual_pua, &bounds.annual_pua),
            horizon_years: horizon,
        };
        log.finish(input)
    }
}

impl Clamp for EstateInput {
    fn clamp_to(&self, bounds: &InputBounds) -> Clamped<Self> {
        let mut log = WarningLog::default();
        let input = EstateInput {
            estate_value: log.float("estateValue", self.estate_value, &bounds.estate_value),
            has_spouse: self.has_spouse,
            state_tax_rate_pct: log.float(
                "stateTaxRatePct",
                self.state_tax_rate_pct,
                &bounds.state_tax_rate_pct,
            ),
            insurance_coverage: log.float(
                "insuranceCoverage",
                self.insurance_coverage,
                &bounds.insurance_coverage,
            ),
        };
        log.finish(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Gender;

    #[test]
    fn test_in_range_input_is_untouched() {
        let input = TermInput::new(35, 500_000.0, 25, 5);
        let clamped = input.clamp_to(&InputBounds::default());

        assert!(!clamped.is_adjusted());
        assert_eq!(clamped.input, input);
    }

    #[test]
    fn test_out_of_range_fields_are_clamped_with_warnings() {
        let input = TermInput::new(75, 50_000.0, 25, -3);
        let clamped = input.clamp_to(&InputBounds::default());

        assert_eq!(clamped.input.age, 60);
        assert_eq!(clamped.input.coverage, 100_000.0);
        assert_eq!(clamped.input.youngest_child_age, 0);
        assert_eq!(clamped.warnings.len(), 3);
        assert_eq!(clamped.warnings[0].field, "age");
        assert_eq!(clamped.warnings[0].requested, 75.0);
        assert_eq!(clamped.warnings[0].applied, 60.0);
    }

    #[test]
    fn test_term_years_snap_to_offered_lengths() {
        let bounds = InputBounds::default();
        assert_eq!(bounds.snap_term(20), 20);
        assert_eq!(bounds.snap_term(22), 20);
        assert_eq!(bounds.snap_term(23), 25);
        assert_eq!(bounds.snap_term(0), 10);
        assert_eq!(bounds.snap_term(45), 30);
        assert_eq!(bounds.snap_term(i32::MIN), 10);
        assert_eq!(bounds.snap_term(i32::MAX), 30);

        let clamped = RopInput::new(500_000.0, 12, 35, Gender::Female).clamp_to(&bounds);
        assert_eq!(clamped.input.term_years, 10);
        assert_eq!(clamped.warnings[0].field, "termYears");
    }

    #[test]
    fn test_zero_horizon_is_raised_to_one_year() {
        let clamped = PuaInput::new(3_600.0, 5_000.0, 0).clamp_to(&InputBounds::default());
        assert_eq!(clamped.input.horizon_years, 1);
        assert_eq!(clamped.warnings.len(), 1);
    }

    #[test]
    fn test_non_finite_values_fall_back_to_minimum() {
        let clamped = EstateInput::new(f64::NAN, false, f64::INFINITY, 0.0)
            .clamp_to(&InputBounds::default());

        assert_eq!(clamped.input.estate_value, 1_000_000.0);
        assert_eq!(clamped.input.state_tax_rate_pct, 0.0);
        assert_eq!(clamped.warnings.len(), 2);
    }
}
