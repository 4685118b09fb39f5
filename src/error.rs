use thiserror::Error;

use crate::models::RecordId;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Invalid input in workout {workout}, exercise #{position}: {field} {detail}")]
    InvalidInput {
        workout: RecordId,
        position: usize,
        field: &'static str,
        detail: String,
    },
    #[error("Could not parse workout data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Workout store returned an error: {0}")]
    Store(String),
    #[error("Unexpected workout data: {0}")]
    Shape(String),
    #[error("Could not read workout data: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = StatsError> = std::result::Result<T, E>;
