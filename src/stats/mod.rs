pub mod aggregator;
pub mod period;
pub mod validate;
pub mod weekday;

pub use aggregator::{
    calculate_stats, calculate_total_weight, calculate_weekly_progress, calculate_weekly_volume,
    estimate_exercise_duration_minutes, exercise_image, summarize_newest_first, summarize_workout,
    workout_minutes, KCAL_PER_MINUTE, SECONDS_PER_REP,
};
pub use period::{filter_by_period, Period, WeekScope};
pub use validate::{collect_issues, validate_workout, validate_workouts};
pub use weekday::{bucket_index, monday_first_index, Language, DAYS};
