//! Return-of-premium comparison
//!
//! Compares a traditional level term premium with its ROP counterpart and with the
//! "buy term and invest the difference" alternative.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assumptions::RopRates;
use crate::format::round_half_up;
use crate::inputs::{Gender, RopInput};
use super::Estimator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RopComparison {
    pub rop_monthly: f64,
    pub traditional_monthly: f64,
    pub total_rop_paid: f64,
    pub total_traditional_paid: f64,
    /// Premiums returned at the end of the term (all of them)
    pub refund_amount: f64,
    /// Value of investing the monthly premium difference instead
    pub investment_alternative: f64,
}

impl RopComparison {
    /// Extra monthly cost of the ROP rider
    pub fn monthly_difference(&self) -> f64 {
        self.rop_monthly - self.traditional_monthly
    }
}

impl RopRates {
    fn rate_per_thousand(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_rate_per_thousand,
            Gender::Female => self.female_rate_per_thousand,
        }
    }
}

impl Estimator for RopRates {
    type Input = RopInput;
    type Output = RopComparison;

    fn estimate(&self, input: &RopInput) -> RopComparison {
        let age_multiplier = 1.0 + (input.age as f64 - self.base_age as f64) * self.age_loading;
        let term_multiplier =
            1.0 + (input.term_years as f64 - self.base_term as f64) * self.term_loading;

        let traditional_monthly = round_half_up(
            input.coverage / 1000.0 * self.rate_per_thousand(input.gender) * age_multiplier * term_multiplier,
        );
        let rop_monthly = round_half_up(traditional_monthly * self.rop_loading_factor);

        let months = 12.0 * input.term_years.max(0) as f64;
        let total_traditional_paid = traditional_monthly * months;
        let total_rop_paid = rop_monthly * months;

        // A non-positive difference leaves nothing to invest
        let annual_contribution = ((rop_monthly - traditional_monthly) * 12.0).max(0.0);
        let mut balance = 0.0;
        for _ in 0..input.term_years.max(0) {
            balance = (balance + annual_contribution) * (1.0 + self.alternative_return);
        }

        debug!(
            "ROP comparison: {} year term, traditional ${}/mo, ROP ${}/mo",
            input.term_years, traditional_monthly, rop_monthly
        );

        RopComparison {
            rop_monthly,
            traditional_monthly,
            total_rop_paid,
            total_traditional_paid,
            refund_amount: total_rop_paid,
            investment_alternative: round_half_up(balance),
        }
    }
}

/// Compare ROP and traditional term using the published illustration constants
pub fn compare_rop(coverage: f64, term_years: i32, age: i32, gender: Gender) -> RopComparison {
    RopRates::default_illustration().estimate(&RopInput::new(coverage, term_years, age, gender))
}
