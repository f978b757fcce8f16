//! Calculator session: current inputs plus the last explicit result
//!
//! A result is only ever shown for the inputs that produced it. Changing any input drops
//! the held result; a new one exists only after [`CalculatorSession::calculate`].
//!
//! # Example
//! ```rust
//! use illustration_calculators::assumptions::EstateRates;
//! use illustration_calculators::inputs::EstateInput;
//! use illustration_calculators::session::CalculatorSession;
//!
//! let mut session = CalculatorSession::new(
//!     EstateRates::default_illustration(),
//!     EstateInput::new(20_000_000.0, false, 0.0, 2_000_000.0),
//! );
//! assert!(session.result().is_none());
//!
//! session.calculate();
//! assert!(session.result().is_some());
//!
//! session.update(|input| input.has_spouse = true);
//! assert!(session.is_stale());
//! ```

use crate::calculators::Estimator;

#[derive(Debug, Clone)]
pub struct CalculatorSession<E: Estimator> {
    estimator: E,
    input: E::Input,
    result: Option<E::Output>,
}

impl<E: Estimator> CalculatorSession<E> {
    /// Start a session with no result
    pub fn new(estimator: E, input: E::Input) -> Self {
        Self {
            estimator,
            input,
            result: None,
        }
    }

    pub fn input(&self) -> &E::Input {
        &self.input
    }

    /// Replace the inputs, dropping any held result
    pub fn set_input(&mut self, input: E::Input) {
        self.input = input;
        self.result = None;
    }

    /// Edit the inputs in place, dropping any held result
    pub fn update<F: FnOnce(&mut E::Input)>(&mut self, edit: F) {
        edit(&mut self.input);
        self.result = None;
    }

    /// Run the estimator on the current inputs and hold the result
    pub fn calculate(&mut self) -> &E::Output {
        self.result.insert(self.estimator.estimate(&self.input))
    }

    /// Result for the current inputs, if one has been calculated
    pub fn result(&self) -> Option<&E::Output> {
        self.result.as_ref()
    }

    pub fn is_stale(&self) -> bool {
        self.result.is_none()
    }

    /// Drop the held result without touching the inputs
    pub fn clear(&mut self) {
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{PuaRates, TermRates};
    use crate::inputs::{PuaInput, TermInput};

    #[test]
    fn test_new_session_has_no_result() {
        let session = CalculatorSession::new(
            TermRates::default_illustration(),
            TermInput::new(35, 500_000.0, 25, 5),
        );

        assert!(session.is_stale());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_calculate_holds_result_until_input_changes() {
        let mut session = CalculatorSession::new(
            TermRates::default_illustration(),
            TermInput::new(35, 500_000.0, 25, 5),
        );

        assert_eq!(session.calculate().primary_term, 25);
        assert_eq!(session.result().map(|r| r.primary_term), Some(25));

        session.update(|input| input.mortgage_years_remaining = 8);
        assert!(session.result().is_none());

        // Child independence (20 years) now drives the term
        assert_eq!(session.calculate().primary_term, 20);
    }

    #[test]
    fn test_set_input_drops_result() {
        let mut session = CalculatorSession::new(
            PuaRates::default_illustration(),
            PuaInput::new(3_600.0, 5_000.0, 10),
        );
        session.calculate();

        session.set_input(PuaInput::new(3_600.0, 5_000.0, 20));
        assert!(session.is_stale());
        assert_eq!(session.calculate().len(), 20);

        session.clear();
        assert!(session.is_stale());
        assert_eq!(session.input().horizon_years, 20);
    }
}
