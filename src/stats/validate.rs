use crate::error::{Result, StatsError};
use crate::models::{ExerciseSet, WorkoutRecord};

/// Rejects records the aggregator cannot sum meaningfully: negative counts,
/// negative rest, negative or non-finite weight. Stops at the first problem.
pub fn validate_workouts(workouts: &[WorkoutRecord]) -> Result<()> {
    for workout in workouts {
        validate_workout(workout)?;
    }
    Ok(())
}

pub fn validate_workout(workout: &WorkoutRecord) -> Result<()> {
    match workout_issues(workout).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every problem across all records, for reporting.
pub fn collect_issues(workouts: &[WorkoutRecord]) -> Vec<StatsError> {
    workouts.iter().flat_map(workout_issues).collect()
}

fn workout_issues(workout: &WorkoutRecord) -> Vec<StatsError> {
    let mut issues = Vec::new();
    for (position, set) in workout.exercise_sets.iter().enumerate() {
        for (field, value) in counts(set) {
            if value < 0 {
                issues.push(invalid(workout, position, field, format!("must not be negative (got {})", value)));
            }
        }
        if !set.weight.is_finite() {
            issues.push(invalid(workout, position, "weight", "must be a finite number".to_string()));
        } else if set.weight < 0.0 {
            issues.push(invalid(
                workout,
                position,
                "weight",
                format!("must not be negative (got {})", set.weight),
            ));
        }
    }
    issues
}

fn counts(set: &ExerciseSet) -> [(&'static str, i64); 3] {
    [
        ("sets", set.sets),
        ("reps", set.reps),
        ("rest_seconds", set.rest_seconds),
    ]
}

fn invalid(workout: &WorkoutRecord, position: usize, field: &'static str, detail: String) -> StatsError {
    StatsError::InvalidInput {
        workout: workout.id.clone(),
        position: position + 1,
        field,
        detail,
    }
}
