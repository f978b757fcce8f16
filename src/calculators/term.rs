//! Term length recommendation
//!
//! The recommended term is driven by the longest remaining obligation: the mortgage or
//! the years until the youngest child is independent. The term is then shortened if it
//! would run past the maximum coverage end age.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assumptions::TermRates;
use crate::format::round_half_up;
use crate::inputs::TermInput;
use super::Estimator;

/// Recommended term and premium estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRecommendation {
    pub primary_term: i32,
    pub alternative_term: i32,
    pub reason: String,
    pub coverage_end_age: i32,
    /// Estimated monthly premium in whole dollars
    pub monthly_estimate: f64,
}

impl Estimator for TermRates {
    type Input = TermInput;
    type Output = TermRecommendation;

    fn estimate(&self, input: &TermInput) -> TermRecommendation {
        let years_until_child_independent = self
            .child_independence_age
            .saturating_sub(input.youngest_child_age)
            .max(0);
        let min_years_needed = years_until_child_independent.max(input.mortgage_years_remaining);

        let bracket = self.bracket_for(min_years_needed);
        let mut primary_term = bracket.primary_term;
        let mut reason = bracket.reason.clone();

        if input.age.saturating_add(primary_term) > self.max_coverage_end_age {
            let years_left = self.max_coverage_end_age.saturating_sub(input.age);
            primary_term = years_left
                .div_euclid(self.term_step_years)
                .saturating_mul(self.term_step_years)
                .max(self.min_term_years);
            reason = self.age_limited_reason.clone();
        }

        let monthly_estimate = round_half_up(
            input.coverage / 1000.0
                * self.rate_per_thousand
                * (1.0 + (input.age as f64 - self.base_age as f64) * self.age_loading)
                * (1.0 + (primary_term as f64 - self.base_term as f64) * self.term_loading),
        );

        debug!(
            "Term recommendation: need {} years -> {} year term (alt {}), ${}/mo",
            min_years_needed, primary_term, bracket.alternative_term, monthly_estimate
        );

        TermRecommendation {
            primary_term,
            alternative_term: bracket.alternative_term,
            reason,
            coverage_end_age: input.age.saturating_add(primary_term),
            monthly_estimate,
        }
    }
}

/// Recommend a term length using the published illustration constants
pub fn recommend(age: i32, coverage: f64, mortgage_years_remaining: i32, youngest_child_age: i32) -> TermRecommendation {
    TermRates::default_illustration().estimate(&TermInput::new(
        age,
        coverage,
        mortgage_years_remaining,
        youngest_child_age,
    ))
}
