//! Load calculator requests from JSON scenario files
//!
//! A scenario file holds either a single request object or an array of them:
//!
//! ```json
//! [
//!   {"calculator": "term", "age": 35, "coverage": 500000, "mortgageYearsRemaining": 25, "youngestChildAge": 5},
//!   {"calculator": "estate", "estateValue": 20000000, "hasSpouse": false, "stateTaxRatePct": 0, "insuranceCoverage": 2000000}
//! ]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::scenario::CalculatorRequest;

/// Parse requests from a JSON string
///
/// The first token decides the shape, so a malformed request reports the offending
/// field rather than a generic shape mismatch.
pub fn parse_requests(json: &str) -> Result<Vec<CalculatorRequest>> {
    if json.trim_start().starts_with('[') {
        Ok(serde_json::from_str(json)?)
    } else {
        Ok(vec![serde_json::from_str(json)?])
    }
}

/// Load requests from any reader (e.g. stdin, request body)
pub fn load_requests_from_reader<R: Read>(mut reader: R) -> Result<Vec<CalculatorRequest>> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_requests(&json)
}

/// Load requests from a JSON file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<CalculatorRequest>> {
    let file = File::open(path)?;
    load_requests_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Gender, RopInput};

    #[test]
    fn test_parse_single_request() {
        let requests = parse_requests(
            r#"{"calculator": "rop", "coverage": 500000, "termYears": 20, "age": 35, "gender": "male"}"#,
        )
        .unwrap();

        assert_eq!(
            requests,
            vec![CalculatorRequest::Rop(RopInput::new(500_000.0, 20, 35, Gender::Male))]
        );
    }

    #[test]
    fn test_parse_request_array() {
        let requests = parse_requests(
            r#"[
                {"calculator": "term", "age": 35, "coverage": 500000, "mortgageYearsRemaining": 25, "youngestChildAge": 5},
                {"calculator": "pua", "basePremium": 3600, "annualPua": 5000, "horizonYears": 10},
                {"calculator": "estate", "estateValue": 20000000, "hasSpouse": true, "stateTaxRatePct": 0, "insuranceCoverage": 0}
            ]"#,
        )
        .unwrap();

        assert_eq!(requests.len(), 3);
        assert!(matches!(requests[1], CalculatorRequest::Pua(_)));
    }

    #[test]
    fn test_missing_field_is_named_in_error() {
        let single = r#"{"calculator": "rop", "coverage": 500000, "age": 35, "gender": "male"}"#;
        let err = parse_requests(single).unwrap_err().to_string();
        assert!(err.contains("termYears"), "unexpected error: {}", err);

        let array = format!("[{}]", single);
        let err = load_requests_from_reader(array.as_bytes()).unwrap_err().to_string();
        assert!(err.contains("termYears"), "unexpected error: {}", err);
    }

    #[test]
    fn test_unknown_calculator_is_rejected() {
        assert!(parse_requests(r#"{"calculator": "annuity", "age": 35}"#).is_err());
    }
}
