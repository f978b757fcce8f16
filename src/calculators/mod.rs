//! Illustration calculators
//!
//! Four independent, pure estimators:
//! - **Term length**: recommended level term and monthly estimate from family obligations
//! - **Return of premium**: traditional vs ROP premiums and the invest-the-difference path
//! - **Paid-up additions**: year-by-year cash value with and without a PUA rider
//! - **Estate tax**: federal and state estate tax and how much an ILIT death benefit covers
//!
//! Each engine is implemented on its assumption set through [`Estimator`], so the same
//! input always produces the same output and nothing is cached between calls.
//!
//! # Example
//!
//! ```rust
//! use illustration_calculators::calculators::{compare_rop, Calculators};
//! use illustration_calculators::inputs::{Gender, EstateInput};
//!
//! let cmp = compare_rop(500_000.0, 20, 35, Gender::Male);
//! assert_eq!(cmp.refund_amount, cmp.total_rop_paid);
//!
//! let calculators = Calculators::default();
//! let estate = calculators.analyze_estate(&EstateInput::new(20_000_000.0, false, 0.0, 2_000_000.0));
//! assert_eq!(estate.percent_covered, 78.0);
//! ```

mod term;
mod rop;
mod pua;
mod estate;

pub use term::{recommend, TermRecommendation};
pub use rop::{compare_rop, RopComparison};
pub use pua::{project_pua, PuaProjection, PuaSummary, PuaYear};
pub use estate::{analyze_estate, EstateAnalysis};

use crate::assumptions::IllustrationAssumptions;
use crate::inputs::{EstateInput, PuaInput, RopInput, TermInput};

/// A pure calculation over an input record
///
/// Implementors must not keep state between calls.
pub trait Estimator {
    type Input;
    type Output;

    fn estimate(&self, input: &Self::Input) -> Self::Output;
}

/// All four calculators over one set of assumptions
#[derive(Debug, Clone, Default)]
pub struct Calculators {
    assumptions: IllustrationAssumptions,
}

impl Calculators {
    pub fn new(assumptions: IllustrationAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn recommend_term(&self, input: &TermInput) -> TermRecommendation {
        self.assumptions.term.estimate(input)
    }

    pub fn compare_rop(&self, input: &RopInput) -> RopComparison {
        self.assumptions.rop.estimate(input)
    }

    pub fn project_pua(&self, input: &PuaInput) -> PuaProjection {
        self.assumptions.pua.estimate(input)
    }

    pub fn analyze_estate(&self, input: &EstateInput) -> EstateAnalysis {
        self.assumptions.estate.estimate(input)
    }

    pub fn assumptions(&self) -> &IllustrationAssumptions {
        &self.assumptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::PuaRates;
    use crate::inputs::Gender;

    #[test]
    fn test_facade_matches_free_functions() {
        let calculators = Calculators::default();

        assert_eq!(
            calculators.recommend_term(&TermInput::new(35, 500_000.0, 25, 5)),
            recommend(35, 500_000.0, 25, 5)
        );
        assert_eq!(
            calculators.compare_rop(&RopInput::new(500_000.0, 20, 35, Gender::Male)),
            compare_rop(500_000.0, 20, 35, Gender::Male)
        );
        assert_eq!(
            calculators.project_pua(&PuaInput::new(3_600.0, 5_000.0, 10)),
            project_pua(3_600.0, 5_000.0, 10)
        );
        assert_eq!(
            calculators.analyze_estate(&EstateInput::new(20_000_000.0, true, 0.0, 0.0)),
            analyze_estate(20_000_000.0, true, 0.0, 0.0)
        );
    }

    #[test]
    fn test_custom_assumptions_flow_through() {
        let mut assumptions = IllustrationAssumptions::default_illustration();
        assumptions.pua = PuaRates {
            growth_rate: 0.06,
            ..PuaRates::default_illustration()
        };
        let calculators = Calculators::new(assumptions);

        let input = PuaInput::new(3_600.0, 5_000.0, 20);
        let faster = calculators.project_pua(&input).summary();
        let published = project_pua(3_600.0, 5_000.0, 20).summary();

        assert!(faster.final_with_pua_cash_value > published.final_with_pua_cash_value);
    }
}
