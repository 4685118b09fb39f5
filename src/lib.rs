//! Derived workout statistics: estimated active minutes and calories, a
//! Monday-first weekly chart, lifted volume and cover-image lookup, computed
//! from workout records exported by the backing store.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod stats;
pub mod utils;

pub use error::{Result, StatsError};
pub use models::{DashboardStats, DayBucket, ExerciseSet, WorkoutRecord};
