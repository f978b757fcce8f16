//! Paid-up addition growth projection
//!
//! Projects cash value year by year for a whole life policy funded with the base
//! premium only, and for the same policy with an annual PUA rider contribution.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assumptions::PuaRates;
use crate::format::round_half_up;
use crate::inputs::PuaInput;
use super::Estimator;

/// A single projected policy year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuaYear {
    pub year: u32,
    pub base_only_cash_value: f64,
    pub with_pua_cash_value: f64,
    pub difference: f64,
    /// Extra cash value from PUAs as a whole percentage of the base-only value
    pub percentage_gain: f64,
    pub total_death_benefit_increase: f64,
    pub base_total_premiums: f64,
    pub with_pua_total_premiums: f64,
}

/// Complete projection, ordered by year ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuaProjection {
    pub years: Vec<PuaYear>,
}

impl PuaProjection {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Last projected year, if any
    pub fn final_year(&self) -> Option<&PuaYear> {
        self.years.last()
    }

    pub fn summary(&self) -> PuaSummary {
        match self.final_year() {
            Some(last) => PuaSummary {
                horizon_years: last.year,
                final_base_only_cash_value: last.base_only_cash_value,
                final_with_pua_cash_value: last.with_pua_cash_value,
                final_difference: last.difference,
                final_percentage_gain: last.percentage_gain,
                total_death_benefit_increase: last.total_death_benefit_increase,
                base_total_premiums: last.base_total_premiums,
                with_pua_total_premiums: last.with_pua_total_premiums,
            },
            None => PuaSummary::default(),
        }
    }
}

/// End-of-horizon figures for a projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuaSummary {
    pub horizon_years: u32,
    pub final_base_only_cash_value: f64,
    pub final_with_pua_cash_value: f64,
    pub final_difference: f64,
    pub final_percentage_gain: f64,
    pub total_death_benefit_increase: f64,
    pub base_total_premiums: f64,
    pub with_pua_total_premiums: f64,
}

impl Estimator for PuaRates {
    type Input = PuaInput;
    type Output = PuaProjection;

    fn estimate(&self, input: &PuaInput) -> PuaProjection {
        let mut years = Vec::with_capacity(input.horizon_years as usize);

        let mut base_only = 0.0;
        let mut with_pua = 0.0;
        let mut base_total_premiums = 0.0;
        let mut with_pua_total_premiums = 0.0;
        let mut death_benefit_increase = 0.0;

        for year in 1..=input.horizon_years {
            let base_contribution = input.base_premium * self.base_efficiency(year);
            let pua_contribution = input.annual_pua * self.pua_efficiency;

            base_only = base_only * (1.0 + self.growth_rate) + base_contribution;
            with_pua = with_pua * (1.0 + self.growth_rate) + base_contribution + pua_contribution;

            base_total_premiums += input.base_premium;
            with_pua_total_premiums += input.base_premium + input.annual_pua;
            death_benefit_increase += input.annual_pua * self.death_benefit_multiple;

            let difference = with_pua - base_only;
            let percentage_gain = if base_only > 0.0 {
                round_half_up(difference / base_only * 100.0)
            } else {
                0.0
            };

            years.push(PuaYear {
                year,
                base_only_cash_value: round_half_up(base_only),
                with_pua_cash_value: round_half_up(with_pua),
                difference: round_half_up(difference),
                percentage_gain,
                total_death_benefit_increase: round_half_up(death_benefit_increase),
                base_total_premiums,
                with_pua_total_premiums,
            });
        }

        debug!(
            "PUA projection: {} years, final cash value ${} vs ${}",
            years.len(),
            round_half_up(with_pua),
            round_half_up(base_only)
        );

        PuaProjection { years }
    }
}

/// Project PUA growth using the published illustration constants
pub fn project_pua(base_premium: f64, annual_pua: f64, horizon_years: u32) -> PuaProjection {
    PuaRates::default_illustration().estimate(&PuaInput::new(base_premium, annual_pua, horizon_years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_year() {
        let projection = project_pua(3_600.0, 5_000.0, 1);
        assert_eq!(projection.len(), 1);

        let year = &projection.years[0];
        assert_eq!(year.year, 1);
        // 3600 * 0.57
        assert_eq!(year.base_only_cash_value, 2_052.0);
        // 2052 + 5000 * 0.95
        assert_eq!(year.with_pua_cash_value, 6_802.0);
        assert_eq!(year.difference, 4_750.0);
        // 4750 / 2052 = 231.5%
        assert_eq!(year.percentage_gain, 231.0);
        assert_eq!(year.total_death_benefit_increase, 12_500.0);
        assert_eq!(year.base_total_premiums, 3_600.0);
        assert_eq!(year.with_pua_total_premiums, 8_600.0);
    }

    #[test]
    fn test_second_year_grows_prior_value() {
        let projection = project_pua(3_600.0, 5_000.0, 2);
        let year2 = &projection.years[1];

        // 2052 * 1.045 + 3600 * 0.59
        assert_relative_eq!(year2.base_only_cash_value, (2052.0_f64 * 1.045 + 2124.0).round());
        assert_eq!(year2.total_death_benefit_increase, 25_000.0);
    }

    #[test]
    fn test_sequence_is_ordered_and_sized_to_horizon() {
        let projection = project_pua(3_600.0, 5_000.0, 30);

        assert_eq!(projection.len(), 30);
        for (i, year) in projection.years.iter().enumerate() {
            assert_eq!(year.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_cash_values_increase_and_pua_never_trails() {
        for (base, pua) in [(1_000.0, 100.0), (3_600.0, 5_000.0), (50_000.0, 50_000.0)] {
            let projection = project_pua(base, pua, 40);

            for year in &projection.years {
                assert!(year.with_pua_cash_value >= year.base_only_cash_value);
            }
            for pair in projection.years.windows(2) {
                assert!(pair[1].base_only_cash_value > pair[0].base_only_cash_value);
                assert!(pair[1].with_pua_cash_value > pair[0].with_pua_cash_value);
            }
        }
    }

    #[test]
    fn test_zero_base_premium_reports_zero_gain() {
        let projection = project_pua(0.0, 5_000.0, 3);

        for year in &projection.years {
            assert_eq!(year.base_only_cash_value, 0.0);
            assert_eq!(year.percentage_gain, 0.0);
            assert!(year.percentage_gain.is_finite());
        }
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        let projection = project_pua(3_600.0, 5_000.0, 0);

        assert!(projection.is_empty());
        assert_eq!(projection.summary(), PuaSummary::default());
    }

    #[test]
    fn test_summary_reflects_final_year() {
        let projection = project_pua(3_600.0, 5_000.0, 20);
        let summary = projection.summary();
        let last = projection.final_year().unwrap();

        assert_eq!(summary.horizon_years, 20);
        assert_eq!(summary.final_with_pua_cash_value, last.with_pua_cash_value);
        assert_eq!(summary.base_total_premiums, 72_000.0);
        assert_eq!(summary.with_pua_total_premiums, 172_000.0);
        assert_eq!(summary.total_death_benefit_increase, 250_000.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        assert_eq!(project_pua(12_000.0, 8_000.0, 25), project_pua(12_000.0, 8_000.0, 25));
    }
}
