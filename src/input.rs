use log::{debug, info};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, StatsError};
use crate::models::WorkoutRecord;
use crate::stats::validate_workouts;

/// Where a workout export is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Parses without validating. Numeric fields that are not numbers fail here.
///
/// Accepts a bare array of records, a single record, or the store's
/// `{ "data": ..., "error": ... }` response body. A non-null `error` or a
/// body without `data` is rejected rather than read as zero workouts.
pub fn parse_workouts<R: Read>(reader: R) -> Result<Vec<WorkoutRecord>> {
    let export: Value = serde_json::from_reader(reader)?;
    match export {
        Value::Array(records) => records_from(Value::Array(records)),
        Value::Object(body) if is_response(&body) => from_response(body),
        Value::Object(record) => Ok(vec![serde_json::from_value(Value::Object(record))?]),
        other => Err(StatsError::Shape(format!(
            "expected an array of workouts, found {}",
            kind(&other)
        ))),
    }
}

fn is_response(body: &Map<String, Value>) -> bool {
    body.contains_key("data") || body.contains_key("error")
}

fn from_response(mut body: Map<String, Value>) -> Result<Vec<WorkoutRecord>> {
    match body.remove("error") {
        None | Some(Value::Null) => {}
        Some(error) => return Err(StatsError::Store(store_message(&error))),
    }
    match body.remove("data") {
        Some(Value::Array(records)) => records_from(Value::Array(records)),
        Some(Value::Object(record)) => Ok(vec![serde_json::from_value(Value::Object(record))?]),
        None | Some(Value::Null) => Err(StatsError::Shape("response carries no data".to_string())),
        Some(other) => Err(StatsError::Shape(format!(
            "expected workouts under \"data\", found {}",
            kind(&other)
        ))),
    }
}

fn records_from(records: Value) -> Result<Vec<WorkoutRecord>> {
    Ok(serde_json::from_value(records)?)
}

fn store_message(error: &Value) -> String {
    error
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn parse_workouts_str(json: &str) -> Result<Vec<WorkoutRecord>> {
    parse_workouts(json.as_bytes())
}

/// Reads, parses and validates a workout export.
pub fn load_workouts(source: &InputSource) -> Result<Vec<WorkoutRecord>> {
    let workouts = read_unchecked(source)?;
    validate_workouts(&workouts)?;
    info!("Loaded {} workouts from {}", workouts.len(), source.describe());
    Ok(workouts)
}

/// Reads and parses without the validation step.
pub fn read_unchecked(source: &InputSource) -> Result<Vec<WorkoutRecord>> {
    debug!("Reading workouts from {}", source.describe());
    match source {
        InputSource::Stdin => parse_workouts(io::stdin().lock()),
        InputSource::File(path) => read_file(path),
    }
}

fn read_file(path: &Path) -> Result<Vec<WorkoutRecord>> {
    let file = File::open(path)?;
    parse_workouts(BufReader::new(file))
}
