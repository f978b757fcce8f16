//! AWS Lambda handler for calculator requests
//!
//! Accepts one calculator request or an array of them as JSON and returns the clamped
//! results. Supports Lambda Function URLs for direct HTTP access.
//!
//! ```json
//! {"calculator": "estate", "estateValue": 20000000, "hasSpouse": false, "stateTaxRatePct": 0, "insuranceCoverage": 2000000}
//! ```

use aws_lambda_events::event::lambda_function_urls::{LambdaFunctionUrlRequest, LambdaFunctionUrlResponse};
use illustration_calculators::{inputs::parse_requests, CalculatorResponse, ScenarioRunner};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::Serialize;
use std::sync::OnceLock;

/// Output for a Function URL invocation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub request_count: usize,
    pub responses: Vec<CalculatorResponse>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn runner() -> &'static ScenarioRunner {
    static RUNNER: OnceLock<ScenarioRunner> = OnceLock::new();
    RUNNER.get_or_init(ScenarioRunner::new)
}

fn response(status_code: i64, body: Option<String>) -> LambdaFunctionUrlResponse {
    let mut response = LambdaFunctionUrlResponse {
        status_code,
        headers: Default::default(),
        body,
        is_base64_encoded: false,
        cookies: Vec::new(),
    };

    for (name, value) in [
        ("content-type", "application/json"),
        ("access-control-allow-origin", "*"),
        ("access-control-allow-methods", "POST, OPTIONS"),
        ("access-control-allow-headers", "Content-Type"),
    ] {
        if let Ok(value) = value.parse() {
            response.headers.insert(name, value);
        }
    }

    response
}

fn error_response(status_code: i64, message: String) -> Result<LambdaFunctionUrlResponse, Error> {
    warn!("Rejecting request ({}): {}", status_code, message);
    let body = serde_json::to_string(&ErrorBody { error: message })?;
    Ok(response(status_code, Some(body)))
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, None));
    }

    if request.is_base64_encoded {
        return error_response(400, "Binary request bodies are not supported".to_string());
    }

    let body = request.body.unwrap_or_default();
    if body.trim().is_empty() {
        return error_response(400, "Request body must contain a calculator request".to_string());
    }

    let requests = match parse_requests(&body) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e)),
    };

    let responses = runner().run_batch(&requests);
    info!("Handled {} calculator requests", responses.len());

    let body = HandlerResponse {
        request_count: responses.len(),
        responses,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(response(200, Some(serde_json::to_string(&body)?)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
