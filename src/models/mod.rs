pub mod stats;
pub mod workout;

pub use stats::{DashboardStats, DayBucket, WeeklyVolume, WorkoutSummary};
pub use workout::{ExerciseDef, ExerciseSet, RecordId, WorkoutRecord};
