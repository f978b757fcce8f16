//! Calculator input records, one per engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// Gender of the insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(CalculatorError::UnknownGender(s.to_string())),
        }
    }
}

/// Inputs to the term length recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermInput {
    /// Current age of the insured
    pub age: i32,

    /// Face amount in dollars
    pub coverage: f64,

    /// Years left on the mortgage
    pub mortgage_years_remaining: i32,

    /// Age of the youngest child
    pub youngest_child_age: i32,
}

impl TermInput {
    pub fn new(age: i32, coverage: f64, mortgage_years_remaining: i32, youngest_child_age: i32) -> Self {
        Self {
            age,
            coverage,
            mortgage_years_remaining,
            youngest_child_age,
        }
    }
}

/// Inputs to the return-of-premium comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RopInput {
    /// Face amount in dollars
    pub coverage: f64,

    /// Level term period in years
    pub term_years: i32,

    /// Issue age
    pub age: i32,

    pub gender: Gender,
}

impl RopInput {
    pub fn new(coverage: f64, term_years: i32, age: i32, gender: Gender) -> Self {
        Self {
            coverage,
            term_years,
            age,
            gender,
        }
    }
}

/// Inputs to the paid-up addition growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuaInput {
    /// Annual base whole life premium
    pub base_premium: f64,

    /// Annual PUA rider contribution on top of the base premium
    pub annual_pua: f64,

    /// Number of policy years to project
    pub horizon_years: u32,
}

impl PuaInput {
    pub fn new(base_premium: f64, annual_pua: f64, horizon_years: u32) -> Self {
        Self {
            base_premium,
            annual_pua,
            horizon_years,
        }
    }
}

/// Inputs to the estate tax / ILIT coverage analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstateInput {
    /// Gross estate value in dollars
    pub estate_value: f64,

    /// Married, so the spouse's unused exemption ports over
    pub has_spouse: bool,

    /// State estate tax rate as a percentage (e.g. 16.0 for 16%)
    pub state_tax_rate_pct: f64,

    /// Death benefit held in the ILIT
    pub insurance_coverage: f64,
}

impl EstateInput {
    pub fn new(estate_value: f64, has_spouse: bool, state_tax_rate_pct: f64, insurance_coverage: f64) -> Self {
        Self {
            estate_value,
            has_spouse,
            state_tax_rate_pct,
            insurance_coverage,
        }
    }
}
