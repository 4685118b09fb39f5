use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::RecordId;
use crate::stats::weekday::{self, Language};

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub calories: i64,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub day: Weekday,
    pub minutes: i64,
    /// Share of the busiest day, 0..=100. Used as bar height.
    pub percentage: f64,
    pub is_today: bool,
}

impl DayBucket {
    pub fn label(&self, language: Language) -> &'static str {
        weekday::label(self.day, language)
    }
}

/// Lifted volume (kg) per weekday, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    pub days: [Weekday; 7],
    pub data: [f64; 7],
}

impl WeeklyVolume {
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn peak(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub id: RecordId,
    pub name: String,
    pub exercise_count: usize,
    pub minutes: i64,
    pub volume: f64,
    pub image_url: String,
}
