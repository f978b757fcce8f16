//! Scenario runner for batch calculator requests
//!
//! Holds one set of assumptions and bounds, clamps every request at the boundary and
//! runs it through the matching calculator. Requests are independent, so batches are
//! evaluated in parallel.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assumptions::IllustrationAssumptions;
use crate::calculators::{
    Calculators, EstateAnalysis, PuaProjection, RopComparison, TermRecommendation,
};
use crate::error::Result;
use crate::inputs::{Clamp, ClampWarning, EstateInput, InputBounds, PuaInput, RopInput, TermInput};

/// One calculator invocation, tagged by calculator name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "lowercase")]
pub enum CalculatorRequest {
    Term(TermInput),
    Rop(RopInput),
    Pua(PuaInput),
    Estate(EstateInput),
}

impl CalculatorRequest {
    pub fn name(&self) -> &'static str {
        match self {
            CalculatorRequest::Term(_) => "term",
            CalculatorRequest::Rop(_) => "rop",
            CalculatorRequest::Pua(_) => "pua",
            CalculatorRequest::Estate(_) => "estate",
        }
    }
}

/// Calculator output for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculatorOutput {
    Term(TermRecommendation),
    Rop(RopComparison),
    Pua(PuaProjection),
    Estate(EstateAnalysis),
}

/// Result of running one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub calculator: String,
    /// Inputs that were moved into range before calculating
    pub warnings: Vec<ClampWarning>,
    pub result: CalculatorOutput,
}

/// Pre-loaded runner for calculator requests
///
/// # Example
/// ```rust
/// use illustration_calculators::scenario::{CalculatorRequest, ScenarioRunner};
/// use illustration_calculators::inputs::TermInput;
///
/// let runner = ScenarioRunner::new();
/// let response = runner.run(&CalculatorRequest::Term(TermInput::new(35, 500_000.0, 25, 5)));
/// assert!(response.warnings.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    calculators: Calculators,
    bounds: InputBounds,
}

impl ScenarioRunner {
    /// Create runner with the published illustration constants
    pub fn new() -> Self {
        Self::with_assumptions(IllustrationAssumptions::default_illustration())
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_assumptions(IllustrationAssumptions::from_csv()?))
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::with_assumptions(IllustrationAssumptions::from_csv_path(path)?))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: IllustrationAssumptions) -> Self {
        Self {
            calculators: Calculators::new(assumptions),
            bounds: InputBounds::default(),
        }
    }

    /// Replace the boundary ranges requests are clamped to
    pub fn with_bounds(mut self, bounds: InputBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Clamp and run a single request
    pub fn run(&self, request: &CalculatorRequest) -> CalculatorResponse {
        let (warnings, result) = match request {
            CalculatorRequest::Term(input) => {
                let clamped = input.clamp_to(&self.bounds);
                let output = self.calculators.recommend_term(&clamped.input);
                (clamped.warnings, CalculatorOutput::Term(output))
            }
            CalculatorRequest::Rop(input) => {
                let clamped = input.clamp_to(&self.bounds);
                let output = self.calculators.compare_rop(&clamped.input);
                (clamped.warnings, CalculatorOutput::Rop(output))
            }
            CalculatorRequest::Pua(input) => {
                let clamped = input.clamp_to(&self.bounds);
                let output = self.calculators.project_pua(&clamped.input);
                (clamped.warnings, CalculatorOutput::Pua(output))
            }
            CalculatorRequest::Estate(input) => {
                let clamped = input.clamp_to(&self.bounds);
                let output = self.calculators.analyze_estate(&clamped.input);
                (clamped.warnings, CalculatorOutput::Estate(output))
            }
        };

        CalculatorResponse {
            calculator: request.name().to_string(),
            warnings,
            result,
        }
    }

    /// Run many requests in parallel; responses keep request order
    pub fn run_batch(&self, requests: &[CalculatorRequest]) -> Vec<CalculatorResponse> {
        let responses: Vec<_> = requests.par_iter().map(|r| self.run(r)).collect();
        let adjusted = responses.iter().filter(|r| !r.warnings.is_empty()).count();
        info!("Ran {} requests ({} with clamped inputs)", responses.len(), adjusted);
        responses
    }

    pub fn calculators(&self) -> &Calculators {
        &self.calculators
    }

    pub fn bounds(&self) -> &InputBounds {
        &self.bounds
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Gender;

    fn mixed_requests() -> Vec<CalculatorRequest> {
        vec![
            CalculatorRequest::Term(TermInput::new(35, 500_000.0, 25, 5)),
            CalculatorRequest::Rop(RopInput::new(500_000.0, 20, 35, Gender::Male)),
            CalculatorRequest::Pua(PuaInput::new(3_600.0, 5_000.0, 10)),
            CalculatorRequest::Estate(EstateInput::new(20_000_000.0, false, 0.0, 2_000_000.0)),
        ]
    }

    #[test]
    fn test_runner_dispatches_to_matching_calculator() {
        let runner = ScenarioRunner::new();
        let responses = runner.run_batch(&mixed_requests());

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0].calculator, "term");
        assert!(matches!(responses[0].result, CalculatorOutput::Term(ref r) if r.primary_term == 25));
        assert!(matches!(responses[1].result, CalculatorOutput::Rop(ref r) if r.rop_monthly == 263.0));
        assert!(matches!(responses[2].result, CalculatorOutput::Pua(ref r) if r.len() == 10));
        assert!(matches!(responses[3].result, CalculatorOutput::Estate(ref r) if r.percent_covered == 78.0));
        assert!(responses.iter().all(|r| r.warnings.is_empty()));
    }

    #[test]
    fn test_out_of_range_request_is_clamped_not_rejected() {
        let runner = ScenarioRunner::new();
        let response = runner.run(&CalculatorRequest::Pua(PuaInput::new(3_600.0, 5_000.0, 0)));

        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.warnings[0].field, "horizonYears");
        assert!(matches!(response.result, CalculatorOutput::Pua(ref r) if r.len() == 1));
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let runner = ScenarioRunner::new();
        let requests = mixed_requests();

        let sequential: Vec<_> = requests.iter().map(|r| runner.run(r)).collect();
        assert_eq!(runner.run_batch(&requests), sequential);
    }

    #[test]
    fn test_response_serializes_with_plain_fields() {
        let runner = ScenarioRunner::new();
        let response = runner.run(&CalculatorRequest::Estate(EstateInput::new(
            20_000_000.0,
            true,
            0.0,
            0.0,
        )));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["calculator"], "estate");
        assert_eq!(json["result"]["effectiveExemption"], 27_220_000.0);
        assert_eq!(json["result"]["percentCovered"], 100.0);
    }
}
