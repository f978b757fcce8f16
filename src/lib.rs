//! Illustration Calculators - Life insurance illustrations for agency sales pages
//!
//! This library provides:
//! - Term length recommendation from mortgage and child obligations
//! - Return-of-premium vs traditional term comparison
//! - Paid-up addition cash value projection
//! - Estate tax and ILIT coverage analysis
//! - Boundary clamping, stale-result sessions and parallel batch evaluation

pub mod error;
pub mod format;
pub mod inputs;
pub mod assumptions;
pub mod calculators;
pub mod session;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use assumptions::IllustrationAssumptions;
pub use calculators::{
    Calculators, Estimator, TermRecommendation, RopComparison, PuaProjection, PuaYear, EstateAnalysis,
};
pub use inputs::{Gender, TermInput, RopInput, PuaInput, EstateInput, InputBounds};
pub use session::CalculatorSession;
pub use scenario::{ScenarioRunner, CalculatorRequest, CalculatorResponse};
