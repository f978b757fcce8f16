//! Estate tax / ILIT coverage analysis

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assumptions::EstateRates;
use crate::format::round_half_up;
use crate::inputs::EstateInput;
use super::Estimator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstateAnalysis {
    pub effective_exemption: f64,
    pub taxable_estate: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub total_tax: f64,
    pub tax_covered_by_insurance: f64,
    pub remaining_tax_burden: f64,
    /// Share of the total tax paid by the ILIT death benefit, 0-100
    pub percent_covered: f64,
}

impl EstateAnalysis {
    pub fn is_fully_covered(&self) -> bool {
        self.remaining_tax_burden <= 0.0
    }
}

impl Estimator for EstateRates {
    type Input = EstateInput;
    type Output = EstateAnalysis;

    fn estimate(&self, input: &EstateInput) -> EstateAnalysis {
        let effective_exemption = if input.has_spouse {
            self.federal_exemption * self.spousal_exemption_multiple
        } else {
            self.federal_exemption
        };

        let taxable_estate = (input.estate_value - effective_exemption).max(0.0);
        let federal_tax = round_half_up(taxable_estate * self.federal_rate);
        // State tax applies to the whole estate, not the amount above the federal exemption
        let state_tax = round_half_up(input.estate_value * input.state_tax_rate_pct / 100.0);
        let total_tax = federal_tax + state_tax;

        let tax_covered_by_insurance = input.insurance_coverage.min(total_tax);
        let remaining_tax_burden = (total_tax - input.insurance_coverage).max(0.0);
        let percent_covered = if total_tax > 0.0 {
            round_half_up(tax_covered_by_insurance / total_tax * 100.0)
        } else {
            100.0
        };

        debug!(
            "Estate analysis: taxable ${}, total tax ${}, {}% covered",
            taxable_estate, total_tax, percent_covered
        );

        EstateAnalysis {
            effective_exemption,
            taxable_estate,
            federal_tax,
            state_tax,
            total_tax,
            tax_covered_by_insurance,
            remaining_tax_burden,
            percent_covered,
        }
    }
}

/// Analyze estate tax coverage using the published 2024 constants
pub fn analyze_estate(estate_value: f64, has_spouse: bool, state_tax_rate_pct: f64, insurance_coverage: f64) -> EstateAnalysis {
    EstateRates::default_illustration().estimate(&EstateInput::new(
        estate_value,
        has_spouse,
        state_tax_rate_pct,
        insurance_coverage,
    ))
}
