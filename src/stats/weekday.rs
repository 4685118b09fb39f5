//! Weekday numbering for the weekly chart.
//!
//! Stored timestamps yield Sunday-first day numbers (Sunday = 0) while the
//! chart runs Monday to Sunday. All conversions go through here.

use chrono::{DateTime, Datelike, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Display order of the seven buckets.
pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Maps a Sunday-first day number (0 = Sunday .. 6 = Saturday) to its
/// Monday-first bucket (0 = Monday .. 6 = Sunday).
pub fn monday_first_index(days_from_sunday: u32) -> usize {
    match days_from_sunday % 7 {
        0 => 6,
        d => (d - 1) as usize,
    }
}

pub fn bucket_index(day: Weekday) -> usize {
    monday_first_index(day.num_days_from_sunday())
}

/// Weekday of `instant` on the wall clock of `tz`.
pub fn local_weekday<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> Weekday {
    instant.with_timezone(tz).weekday()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "pt" | "pt-br" | "pt-pt" | "portuguese" => Ok(Language::Pt),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

const LABELS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const LABELS_PT: [&str; 7] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"];

pub fn label(day: Weekday, language: Language) -> &'static str {
    let idx = bucket_index(day);
    match language {
        Language::En => LABELS_EN[idx],
        Language::Pt => LABELS_PT[idx],
    }
}
