//! CSV-based assumption loader
//!
//! Loads illustration constants from `data/assumptions/illustration_rates.csv`, a two
//! column `name,value` file. Every numeric constant must be present exactly once.

use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CalculatorError, Result};

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File holding the named illustration constants
pub const RATES_FILE: &str = "illustration_rates.csv";

/// Raw name -> value pairs read from the rates file
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    values: HashMap<String, f64>,
}

impl LoadedAssumptions {
    /// Load from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load the rates file from a specific directory
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = File::open(path.join(RATES_FILE))?;
        let loaded = Self::from_reader(file)?;
        debug!("Loaded {} illustration constants from {}", loaded.len(), path.display());
        Ok(loaded)
    }

    /// Load from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut values = HashMap::new();

        for result in reader.records() {
            let record = result?;
            let name = record[0].trim().to_string();
            let raw = record[1].trim();
            let value: f64 = raw.parse().map_err(|_| CalculatorError::InvalidAssumption {
                name: name.clone(),
                value: raw.to_string(),
            })?;
            if values.contains_key(&name) {
                return Err(CalculatorError::DuplicateAssumption(name));
            }
            values.insert(name, value);
        }

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Draws values out by name, so leftovers can be reported as unknown
    pub(crate) fn into_cursor(self) -> AssumptionCursor {
        AssumptionCursor { values: self.values }
    }
}

pub(crate) struct AssumptionCursor {
    values: HashMap<String, f64>,
}

impl AssumptionCursor {
    pub(crate) fn take(&mut self, name: &'static str) -> Result<f64> {
        let value = self
            .values
            .remove(name)
            .ok_or(CalculatorError::MissingAssumption(name))?;
        if !value.is_finite() {
            return Err(invalid(name, value));
        }
        Ok(value)
    }

    pub(crate) fn take_whole(&mut self, name: &'static str) -> Result<i32> {
        let value = self.take(name)?;
        if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
            return Err(invalid(name, value));
        }
        Ok(value as i32)
    }

    /// Whole number that is used as a step or floor and must be at least one
    pub(crate) fn take_positive_whole(&mut self, name: &'static str) -> Result<i32> {
        let value = self.take_whole(name)?;
        if value < 1 {
            return Err(invalid(name, value as f64));
        }
        Ok(value)
    }

    /// Fails on the first name that was never taken
    pub(crate) fn finish(self) -> Result<()> {
        let mut leftover: Vec<_> = self.values.into_keys().collect();
        leftover.sort();
        match leftover.into_iter().next() {
            Some(name) => Err(CalculatorError::UnknownAssumption(name)),
            None => Ok(()),
        }
    }
}

fn invalid(name: &str, value: f64) -> CalculatorError {
    CalculatorError::InvalidAssumption {
        name: name.to_string(),
        value: value.to_string(),
    }
}
