//! Illustration assumptions for every calculator

mod rates;
pub mod loader;

pub use rates::{TermBracket, TermRates, RopRates, PuaRates, EstateRates};
pub use loader::LoadedAssumptions;

use std::path::Path;

use crate::error::Result;

/// Container for all calculator assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct IllustrationAssumptions {
    pub term: TermRates,
    pub rop: RopRates,
    pub pua: PuaRates,
    pub estate: EstateRates,
}

impl IllustrationAssumptions {
    /// Create assumptions with the published illustration constants
    pub fn default_illustration() -> Self {
        Self {
            term: TermRates::default_illustration(),
            rop: RopRates::default_illustration(),
            pua: PuaRates::default_illustration(),
            estate: EstateRates::default_illustration(),
        }
    }

    /// Load assumptions from CSV in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(loaded)
    }

    /// Build from loaded values. Term brackets and reason text are not numeric and keep
    /// their published values. Every value must be finite, and the term step and minimum
    /// term must be at least one year.
    pub fn from_loaded(loaded: LoadedAssumptions) -> Result<Self> {
        let mut values = loaded.into_cursor();
        let defaults = Self::default_illustration();

        let term = TermRates {
            child_independence_age: values.take_whole("term.child_independence_age")?,
            max_coverage_end_age: values.take_whole("term.max_coverage_end_age")?,
            min_term_years: values.take_positive_whole("term.min_term_years")?,
            term_step_years: values.take_positive_whole("term.term_step_years")?,
            rate_per_thousand: values.take("term.rate_per_thousand")?,
            base_age: values.take_whole("term.base_age")?,
            age_loading: values.take("term.age_loading")?,
            base_term: values.take_whole("term.base_term")?,
            term_loading: values.take("term.term_loading")?,
            ..defaults.term
        };

        let rop = RopRates {
            male_rate_per_thousand: values.take("rop.male_rate_per_thousand")?,
            female_rate_per_thousand: values.take("rop.female_rate_per_thousand")?,
            base_age: values.take_whole("rop.base_age")?,
            age_loading: values.take("rop.age_loading")?,
            base_term: values.take_whole("rop.base_term")?,
            term_loading: values.take("rop.term_loading")?,
            rop_loading_factor: values.take("rop.rop_loading_factor")?,
            alternative_return: values.take("rop.alternative_return")?,
        };

        let pua = PuaRates {
            base_efficiency_start: values.take("pua.base_efficiency_start")?,
            base_efficiency_step: values.take("pua.base_efficiency_step")?,
            base_efficiency_cap: values.take("pua.base_efficiency_cap")?,
            pua_efficiency: values.take("pua.pua_efficiency")?,
            growth_rate: values.take("pua.growth_rate")?,
            death_benefit_multiple: values.take("pua.death_benefit_multiple")?,
        };

        let estate = EstateRates {
            federal_exemption: values.take("estate.federal_exemption")?,
            federal_rate: values.take("estate.federal_rate")?,
            spousal_exemption_multiple: values.take("estate.spousal_exemption_multiple")?,
        };

        values.finish()?;

        Ok(Self { term, rop, pua, estate })
    }
}

impl Default for IllustrationAssumptions {
    fn default() -> Self {
        Self::default_illustration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;
    use crate::inputs::TermInput;
    use crate::Estimator;

    fn published_csv_with(name: &str, value: &str) -> String {
        let published = std::fs::read_to_string(
            Path::new(loader::DEFAULT_ASSUMPTIONS_PATH).join(loader::RATES_FILE),
        )
        .unwrap();
        published
            .lines()
            .map(|line| match line.split_once(',') {
                Some((key, _)) if key.trim() == name => format!("{},{}", name, value),
                _ => line.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_csv_matches_published_constants() {
        let from_csv = IllustrationAssumptions::from_csv().expect("Failed to load assumptions");
        assert_eq!(from_csv, IllustrationAssumptions::default_illustration());
    }

    #[test]
    fn test_missing_constant_is_an_error() {
        let csv = "name,value\nestate.federal_rate,0.4\n";
        let loaded = LoadedAssumptions::from_reader(csv.as_bytes()).unwrap();
        assert!(IllustrationAssumptions::from_loaded(loaded).is_err());
    }

    #[test]
    fn test_zero_term_step_is_rejected() {
        let csv = published_csv_with("term.term_step_years", "0");
        let loaded = LoadedAssumptions::from_reader(csv.as_bytes()).unwrap();

        let err = IllustrationAssumptions::from_loaded(loaded).unwrap_err();
        assert!(matches!(
            err,
            CalculatorError::InvalidAssumption { name, .. } if name == "term.term_step_years"
        ));
    }

    #[test]
    fn test_zero_minimum_term_is_rejected() {
        let csv = published_csv_with("term.min_term_years", "0");
        let loaded = LoadedAssumptions::from_reader(csv.as_bytes()).unwrap();
        assert!(IllustrationAssumptions::from_loaded(loaded).is_err());
    }

    #[test]
    fn test_infinite_rate_is_rejected() {
        let csv = published_csv_with("rop.rop_loading_factor", "inf");
        let loaded = LoadedAssumptions::from_reader(csv.as_bytes()).unwrap();
        assert!(IllustrationAssumptions::from_loaded(loaded).is_err());
    }

    #[test]
    fn test_overridden_step_still_drives_age_limit() {
        let csv = published_csv_with("term.term_step_years", "1");
        let loaded = LoadedAssumptions::from_reader(csv.as_bytes()).unwrap();
        let assumptions = IllustrationAssumptions::from_loaded(loaded).unwrap();

        // 22 years remain before 80 and any whole year is allowed
        let rec = assumptions.term.estimate(&TermInput::new(58, 500_000.0, 30, 0));
        assert_eq!(rec.primary_term, 22);
    }
}
