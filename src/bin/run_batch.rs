//! Run a batch of calculator requests from a JSON scenario file
//!
//! Usage: run_batch <requests.json> [output.json]
//!
//! Set ASSUMPTIONS_PATH to load constants from a directory other than the published
//! defaults. Output goes to stdout when no output path is given.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use illustration_calculators::{
    inputs::load_requests, CalculatorResponse, IllustrationAssumptions, ScenarioRunner,
};
use log::info;
use serde::Serialize;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchOutput {
    generated_at: DateTime<Utc>,
    request_count: usize,
    warning_count: usize,
    execution_time_ms: u64,
    responses: Vec<CalculatorResponse>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(input_path) = args.get(1) else {
        bail!("Usage: run_batch <requests.json> [output.json]");
    };

    let assumptions = match env::var("ASSUMPTIONS_PATH") {
        Ok(dir) => IllustrationAssumptions::from_csv_path(Path::new(&dir))
            .with_context(|| format!("Failed to load assumptions from {}", dir))?,
        Err(_) => IllustrationAssumptions::default_illustration(),
    };

    let start = Instant::now();
    let requests = load_requests(input_path)
        .with_context(|| format!("Failed to load requests from {}", input_path))?;
    info!("Loaded {} requests from {}", requests.len(), input_path);

    let runner = ScenarioRunner::with_assumptions(assumptions);
    let responses = runner.run_batch(&requests);

    let output = BatchOutput {
        generated_at: Utc::now(),
        request_count: responses.len(),
        warning_count: responses.iter().map(|r| r.warnings.len()).sum(),
        execution_time_ms: start.elapsed().as_millis() as u64,
        responses,
    };

    match args.get(2) {
        Some(output_path) => {
            let file = File::create(output_path)
                .with_context(|| format!("Failed to create {}", output_path))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &output)?;
            writer.flush()?;
            println!("Wrote {} responses to {}", output.request_count, output_path);
        }
        None => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    if output.warning_count > 0 {
        eprintln!("{} inputs were clamped to their allowed ranges", output.warning_count);
    }

    Ok(())
}
