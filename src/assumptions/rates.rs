//! Named illustration constants for each calculator
//!
//! These are marketing illustration figures, not licensed pricing. They are kept exactly
//! as published and carry no actuarial derivation.

use serde::{Deserialize, Serialize};

/// One bracket of the term length table: needs up to `max_years_needed` map to
/// `primary_term` with `alternative_term` offered alongside
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermBracket {
    pub max_years_needed: i32,
    pub primary_term: i32,
    pub alternative_term: i32,
    pub reason: String,
}

impl TermBracket {
    fn new(max_years_needed: i32, primary_term: i32, alternative_term: i32, reason: &str) -> Self {
        Self {
            max_years_needed,
            primary_term,
            alternative_term,
            reason: reason.to_string(),
        }
    }
}

/// Term length recommendation constants
#[derive(Debug, Clone, PartialEq)]
pub struct TermRates {
    /// Age at which the youngest child is assumed financially independent
    pub child_independence_age: i32,

    /// Coverage must end by this attained age
    pub max_coverage_end_age: i32,

    /// Shortest term offered
    pub min_term_years: i32,

    /// Terms are sold in multiples of this many years
    pub term_step_years: i32,

    /// Brackets in ascending order of `max_years_needed`
    pub brackets: Vec<TermBracket>,

    /// Used when the need exceeds every bracket
    pub longest: TermBracket,

    /// Reason shown when the term is shortened by the age limit
    pub age_limited_reason: String,

    /// Monthly premium per $1,000 of coverage at the base age and term
    pub rate_per_thousand: f64,

    pub base_age: i32,

    /// Premium loading per year of age above `base_age`
    pub age_loading: f64,

    pub base_term: i32,

    /// Premium loading per year of term above `base_term`
    pub term_loading: f64,
}

impl TermRates {
    pub fn default_illustration() -> Self {
        Self {
            child_independence_age: 25,
            max_coverage_end_age: 80,
            min_term_years: 10,
            term_step_years: 5,
            brackets: vec![
                TermBracket::new(10, 10, 15, "Your obligations wrap up within 10 years, so a 10-year term covers them at the lowest cost."),
                TermBracket::new(15, 15, 20, "A 15-year term carries you past your mortgage and until your youngest is independent."),
                TermBracket::new(20, 20, 25, "A 20-year term protects your family through the years they depend on you most."),
                TermBracket::new(25, 25, 30, "A 25-year term lines up with your longest obligation, whether that is the mortgage or the kids."),
            ],
            longest: TermBracket::new(i32::MAX, 30, 30, "Your obligations run more than 25 years, so the longest 30-year term is the right fit."),
            age_limited_reason: "Coverage is shortened so the term ends by age 80, the latest age carriers will issue level term to.".to_string(),
            rate_per_thousand: 0.12,
            base_age: 25,
            age_loading: 0.035,
            base_term: 10,
            term_loading: 0.025,
        }
    }

    /// Bracket covering the given number of years
    pub fn bracket_for(&self, years_needed: i32) -> &TermBracket {
        self.brackets
            .iter()
            .find(|b| years_needed <= b.max_years_needed)
            .unwrap_or(&self.longest)
    }
}

/// Return-of-premium comparison constants
#[derive(Debug, Clone, PartialEq)]
pub struct RopRates {
    /// Monthly rate per $1,000 for male insureds
    pub male_rate_per_thousand: f64,

    /// Monthly rate per $1,000 for female insureds
    pub female_rate_per_thousand: f64,

    pub base_age: i32,
    pub age_loading: f64,
    pub base_term: i32,
    pub term_loading: f64,

    /// ROP premium as a multiple of the traditional premium
    pub rop_loading_factor: f64,

    /// Annual return earned by investing the premium difference
    pub alternative_return: f64,
}

impl RopRates {
    pub fn default_illustration() -> Self {
        Self {
            male_rate_per_thousand: 0.12,
            female_rate_per_thousand: 0.10,
            base_age: 25,
            age_loading: 0.03,
            base_term: 10,
            term_loading: 0.02,
            rop_loading_factor: 2.8,
            alternative_return: 0.07,
        }
    }
}

/// Paid-up addition projection constants
#[derive(Debug, Clone, PartialEq)]
pub struct PuaRates {
    /// Share of the base premium reaching cash value in year 0
    pub base_efficiency_start: f64,

    /// Yearly improvement of the base premium efficiency
    pub base_efficiency_step: f64,

    /// Upper limit on base premium efficiency
    pub base_efficiency_cap: f64,

    /// Share of a PUA contribution reaching cash value
    pub pua_efficiency: f64,

    /// Annual cash value growth
    pub growth_rate: f64,

    /// Death benefit bought per dollar of PUA contribution
    pub death_benefit_multiple: f64,
}

impl PuaRates {
    pub fn default_illustration() -> Self {
        Self {
            base_efficiency_start: 0.55,
            base_efficiency_step: 0.02,
            base_efficiency_cap: 0.75,
            pua_efficiency: 0.95,
            growth_rate: 0.045,
            death_benefit_multiple: 2.5,
        }
    }

    /// Base premium efficiency for a policy year, capped
    pub fn base_efficiency(&self, year: u32) -> f64 {
        (self.base_efficiency_start + year as f64 * self.base_efficiency_step)
            .min(self.base_efficiency_cap)
    }
}

/// Estate tax constants (2024 federal figures)
#[derive(Debug, Clone, PartialEq)]
pub struct EstateRates {
    /// Individual federal estate tax exemption
    pub federal_exemption: f64,

    /// Flat federal rate applied above the exemption
    pub federal_rate: f64,

    /// Exemption multiple for married couples (portability)
    pub spousal_exemption_multiple: f64,
}

impl EstateRates {
    pub fn default_illustration() -> Self {
        Self {
            federal_exemption: 13_610_000.0,
            federal_rate: 0.40,
            spousal_exemption_multiple: 2.0,
        }
    }
}
