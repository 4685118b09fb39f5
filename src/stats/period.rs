use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::WorkoutRecord;

/// Look-back windows offered by the progress view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Week,
    Month,
    #[serde(rename = "3months", alias = "three_months")]
    ThreeMonths,
    Year,
}

impl Period {
    pub fn all() -> [Period; 4] {
        [Period::Week, Period::Month, Period::ThreeMonths, Period::Year]
    }

    pub fn days(&self) -> i64 {
        match self {
            Period::Week => 7,
            Period::Month => 30,
            Period::ThreeMonths => 90,
            Period::Year => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::ThreeMonths => "3months",
            Period::Year => "year",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Week => "Last 7 days",
            Period::Month => "Last 30 days",
            Period::ThreeMonths => "Last 3 months",
            Period::Year => "Last year",
        }
    }

    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        let now = now.with_timezone(&Utc);
        *instant <= now && *instant > now - Duration::days(self.days())
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" | "7d" => Ok(Period::Week),
            "month" | "30d" => Ok(Period::Month),
            "3months" | "three_months" | "90d" => Ok(Period::ThreeMonths),
            "year" | "365d" => Ok(Period::Year),
            _ => Err(format!(
                "Unknown period '{}'. Use: {}",
                s,
                choices(&Period::all(), Period::as_str)
            )),
        }
    }
}

/// Records created within `period` before `now`.
pub fn filter_by_period<Tz: TimeZone>(
    workouts: &[WorkoutRecord],
    period: Period,
    now: &DateTime<Tz>,
) -> Vec<WorkoutRecord> {
    workouts
        .iter()
        .filter(|w| period.contains(&w.created_at, now))
        .cloned()
        .collect()
}

/// Which records the weekday chart counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekScope {
    /// Every record lands on its weekday no matter how old it is.
    #[default]
    #[serde(rename = "all", alias = "all_time")]
    AllTime,
    /// Only records whose local date is within the last seven days,
    /// today included. Each bucket then maps to exactly one date.
    #[serde(rename = "rolling", alias = "rolling_7_days")]
    Rolling7Days,
}

impl WeekScope {
    pub fn all() -> [WeekScope; 2] {
        [WeekScope::AllTime, WeekScope::Rolling7Days]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekScope::AllTime => "all",
            WeekScope::Rolling7Days => "rolling",
        }
    }

    pub fn includes(&self, created: NaiveDate, today: NaiveDate) -> bool {
        match self {
            WeekScope::AllTime => true,
            WeekScope::Rolling7Days => created <= today && created > today - Duration::days(7),
        }
    }
}

impl std::str::FromStr for WeekScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "all_time" | "alltime" => Ok(WeekScope::AllTime),
            "rolling" | "rolling_7_days" | "7d" => Ok(WeekScope::Rolling7Days),
            _ => Err(format!(
                "Unknown week scope '{}'. Use: {}",
                s,
                choices(&WeekScope::all(), WeekScope::as_str)
            )),
        }
    }
}

fn choices<T>(options: &[T], name: fn(&T) -> &'static str) -> String {
    options.iter().map(name).collect::<Vec<_>>().join(", ")
}
