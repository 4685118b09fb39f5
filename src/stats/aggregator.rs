//! Dashboard figures derived from workout records.
//!
//! Every function here is a single pass over the records it is handed and
//! keeps no state between calls. Anything that depends on "now" takes the
//! evaluation instant as a parameter.

use chrono::{DateTime, Datelike, TimeZone};
use log::debug;

use crate::catalog::images;
use crate::models::{DashboardStats, DayBucket, ExerciseSet, WeeklyVolume, WorkoutRecord, WorkoutSummary};
use crate::stats::period::WeekScope;
use crate::stats::weekday::{self, DAYS};

/// Assumed time under tension per repetition. A heuristic, not a measurement.
pub const SECONDS_PER_REP: f64 = 3.0;

/// Active-minute to kcal conversion.
pub const KCAL_PER_MINUTE: f64 = 7.8;

/// `(sets × reps × 3 s + sets × rest) / 60`. Rest is counted once per set.
pub fn estimate_exercise_duration_minutes(set: &ExerciseSet) -> f64 {
    let sets = set.sets as f64;
    let working = sets * set.reps as f64 * SECONDS_PER_REP;
    let resting = sets * set.rest_seconds as f64;
    (working + resting) / 60.0
}

/// Unrounded minutes for one workout.
pub fn workout_minutes(workout: &WorkoutRecord) -> f64 {
    workout
        .exercise_sets
        .iter()
        .map(estimate_exercise_duration_minutes)
        .sum()
}

fn total_minutes(workouts: &[WorkoutRecord]) -> f64 {
    workouts.iter().map(workout_minutes).sum()
}

/// Minutes and calories are rounded once, from the unrounded total.
pub fn calculate_stats(workouts: &[WorkoutRecord]) -> DashboardStats {
    let minutes = total_minutes(workouts);
    let stats = DashboardStats {
        calories: (minutes * KCAL_PER_MINUTE).round() as i64,
        minutes: minutes.round() as i64,
    };
    debug!(
        "stats over {} workouts: {:.2} min -> {:?}",
        workouts.len(),
        minutes,
        stats
    );
    stats
}

/// Minutes per weekday, Monday first, always seven buckets.
///
/// Records are placed by the weekday of `created_at` on `now`'s wall clock.
/// With [`WeekScope::AllTime`] older weeks pile onto the same weekday.
pub fn calculate_weekly_progress<Tz: TimeZone>(
    workouts: &[WorkoutRecord],
    now: &DateTime<Tz>,
    scope: WeekScope,
) -> Vec<DayBucket> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut totals = [0.0f64; 7];
    for workout in workouts {
        if !scope.includes(workout.created_at.with_timezone(&tz).date_naive(), today) {
            continue;
        }
        let day = weekday::local_weekday(&workout.created_at, &tz);
        totals[weekday::bucket_index(day)] += workout_minutes(workout);
    }

    let minutes = totals.map(|m| m.round() as i64);
    let peak = minutes.iter().copied().max().unwrap_or(0).max(1);
    let today_idx = weekday::bucket_index(now.weekday());

    DAYS.iter()
        .zip(minutes)
        .enumerate()
        .map(|(idx, (day, bucket_minutes))| DayBucket {
            day: *day,
            minutes: bucket_minutes,
            percentage: bucket_minutes as f64 / peak as f64 * 100.0,
            is_today: idx == today_idx,
        })
        .collect()
}

/// Σ sets × reps × weight, unrounded.
pub fn calculate_total_weight(workouts: &[WorkoutRecord]) -> f64 {
    workouts.iter().map(WorkoutRecord::volume).sum()
}

/// Lifted volume per weekday, bucketed the same way as
/// [`calculate_weekly_progress`].
pub fn calculate_weekly_volume<Tz: TimeZone>(
    workouts: &[WorkoutRecord],
    now: &DateTime<Tz>,
    scope: WeekScope,
) -> WeeklyVolume {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut data = [0.0f64; 7];
    for workout in workouts {
        if scope.includes(workout.created_at.with_timezone(&tz).date_naive(), today) {
            let day = weekday::local_weekday(&workout.created_at, &tz);
            data[weekday::bucket_index(day)] += workout.volume();
        }
    }

    WeeklyVolume { days: DAYS, data }
}

pub fn summarize_workout(workout: &WorkoutRecord) -> WorkoutSummary {
    WorkoutSummary {
        id: workout.id.clone(),
        name: workout.name.clone(),
        exercise_count: workout.exercise_sets.len(),
        minutes: workout_minutes(workout).round() as i64,
        volume: workout.volume(),
        image_url: images::image_for(&workout.name).to_string(),
    }
}

/// Listing lines, newest workout first. Equal timestamps keep input order.
pub fn summarize_newest_first(workouts: &[WorkoutRecord]) -> Vec<WorkoutSummary> {
    let mut ordered: Vec<&WorkoutRecord> = workouts.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered.into_iter().map(summarize_workout).collect()
}

/// Picture for one exercise line, from its exercise definition's name.
pub fn exercise_image(set: &ExerciseSet) -> &'static str {
    set.exercise
        .as_ref()
        .map_or(images::DEFAULT_IMAGE, |def| images::image_for(&def.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc, Weekday};

    // 2025-03-05 is a Wednesday.
    fn wednesday(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 5, hour, 0, 0).unwrap()
    }

    fn one_set(id: &str, created_at: DateTime<Utc>, set: ExerciseSet) -> WorkoutRecord {
        WorkoutRecord::new(id, "Treino", created_at).with_set(set)
    }

    /// Exactly `minutes` whole minutes: 20 reps × 3 s per set, no rest.
    fn minutes_set(minutes: i64) -> ExerciseSet {
        ExerciseSet::new(minutes, 20, 0.0, 0)
    }

    #[test]
    fn duration_formula() {
        assert_eq!(estimate_exercise_duration_minutes(&ExerciseSet::new(3, 10, 20.0, 60)), 4.5);
        assert_eq!(estimate_exercise_duration_minutes(&ExerciseSet::new(0, 10, 20.0, 60)), 0.0);
        assert_eq!(estimate_exercise_duration_minutes(&ExerciseSet::new(2, 0, 0.0, 30)), 1.0);
    }

    #[test]
    fn empty_input() {
        let now = wednesday(12);
        assert_eq!(calculate_stats(&[]), DashboardStats { calories: 0, minutes: 0 });
        assert_eq!(calculate_total_weight(&[]), 0.0);

        let week = calculate_weekly_progress(&[], &now, WeekScope::AllTime);
        assert_eq!(week.len(), 7);
        assert!(week.iter().all(|b| b.minutes == 0 && b.percentage == 0.0));
        assert_eq!(week.iter().filter(|b| b.is_today).count(), 1);
    }

    #[test]
    fn workout_without_sets_contributes_nothing() {
        let ws = vec![WorkoutRecord::new("1", "Rest day", wednesday(9))];
        assert_eq!(calculate_stats(&ws), DashboardStats::default());
        assert_eq!(calculate_total_weight(&ws), 0.0);
    }

    #[test]
    fn single_set_scenario() {
        let ws = vec![one_set("1", wednesday(9), ExerciseSet::new(3, 10, 20.0, 60))];
        assert_eq!(calculate_stats(&ws), DashboardStats { calories: 35, minutes: 5 });
        assert_eq!(calculate_total_weight(&ws), 600.0);
    }

    #[test]
    fn two_sets_round_only_at_the_end() {
        let w = WorkoutRecord::new("1", "Peito", wednesday(9))
            .with_set(ExerciseSet::new(3, 10, 0.0, 60))
            .with_set(ExerciseSet::new(4, 8, 50.0, 90));
        let stats = calculate_stats(&[w]);
        assert_eq!(stats.minutes, 12);
        // 12.1 × 7.8 = 94.38
        assert_eq!(stats.calories, 94);
    }

    #[test]
    fn rounding_is_not_per_workout() {
        // 2.4 + 2.4 = 4.8 -> 5, where per-workout rounding would give 4.
        let set = ExerciseSet::new(1, 8, 0.0, 120);
        assert!((estimate_exercise_duration_minutes(&set) - 2.4).abs() < 1e-9);
        let ws = vec![one_set("a", wednesday(8), set.clone()), one_set("b", wednesday(9), set)];
        assert_eq!(calculate_stats(&ws).minutes, 5);
    }

    #[test]
    fn adding_work_never_lowers_minutes() {
        let mut ws = vec![one_set("1", wednesday(9), ExerciseSet::new(3, 10, 20.0, 60))];
        let mut last = calculate_stats(&ws).minutes;
        for i in 0..5 {
            ws.push(one_set(&format!("x{i}"), wednesday(10), ExerciseSet::new(1, 1, 0.0, 0)));
            let next = calculate_stats(&ws).minutes;
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let now = wednesday(18);
        let ws = vec![
            one_set("1", wednesday(9), ExerciseSet::new(3, 10, 20.0, 60)),
            one_set("2", wednesday(9) - Duration::days(2), ExerciseSet::new(4, 8, 50.0, 90)),
        ];
        assert_eq!(calculate_stats(&ws), calculate_stats(&ws));
        assert_eq!(
            calculate_weekly_progress(&ws, &now, WeekScope::AllTime),
            calculate_weekly_progress(&ws, &now, WeekScope::AllTime)
        );
        assert_eq!(calculate_total_weight(&ws).to_bits(), calculate_total_weight(&ws).to_bits());
    }

    #[test]
    fn wednesday_only() {
        let now = Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap(); // Friday
        let ws = vec![one_set("1", wednesday(9), minutes_set(10))];
        let week = calculate_weekly_progress(&ws, &now, WeekScope::AllTime);

        for bucket in &week {
            if bucket.day == Weekday::Wed {
                assert_eq!(bucket.minutes, 10);
                assert_eq!(bucket.percentage, 100.0);
            } else {
                assert_eq!(bucket.minutes, 0);
                assert_eq!(bucket.percentage, 0.0);
            }
        }
        let today: Vec<Weekday> = week.iter().filter(|b| b.is_today).map(|b| b.day).collect();
        assert_eq!(today, vec![Weekday::Fri]);
    }

    #[test]
    fn buckets_run_monday_to_sunday() {
        let now = wednesday(12);
        let sunday = Utc.with_ymd_and_hms(2025, 3, 2, 10, 0, 0).unwrap();
        let monday = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
        let ws = vec![one_set("sun", sunday, minutes_set(4)), one_set("mon", monday, minutes_set(8))];

        let week = calculate_weekly_progress(&ws, &now, WeekScope::AllTime);
        let days: Vec<Weekday> = week.iter().map(|b| b.day).collect();
        assert_eq!(days, DAYS.to_vec());
        assert_eq!(week[0].minutes, 8);
        assert_eq!(week[0].percentage, 100.0);
        assert_eq!(week[6].minutes, 4);
        assert_eq!(week[6].percentage, 50.0);
        assert!(week[2].is_today);
    }

    #[test]
    fn bucket_sum_matches_total_for_distinct_days() {
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 20, 0, 0).unwrap();
        let ws: Vec<WorkoutRecord> = (0..7)
            .map(|i| {
                one_set(
                    &i.to_string(),
                    Utc.with_ymd_and_hms(2025, 3, 3 + i, 7, 0, 0).unwrap(),
                    minutes_set(i as i64 + 1),
                )
            })
            .collect();

        let week = calculate_weekly_progress(&ws, &now, WeekScope::AllTime);
        let bucket_sum: i64 = week.iter().map(|b| b.minutes).sum();
        assert_eq!(bucket_sum, calculate_stats(&ws).minutes);
        assert_eq!(bucket_sum, 28);
    }

    #[test]
    fn all_time_scope_stacks_past_weeks() {
        let now = wednesday(12);
        let ws = vec![
            one_set("this", wednesday(9), minutes_set(10)),
            one_set("last", wednesday(9) - Duration::weeks(1), minutes_set(5)),
            one_set("ancient", wednesday(9) - Duration::weeks(30), minutes_set(5)),
        ];

        let all = calculate_weekly_progress(&ws, &now, WeekScope::AllTime);
        assert_eq!(all[2].minutes, 20);

        let rolling = calculate_weekly_progress(&ws, &now, WeekScope::Rolling7Days);
        assert_eq!(rolling[2].minutes, 10);
        assert_eq!(rolling.iter().map(|b| b.minutes).sum::<i64>(), 10);
    }

    #[test]
    fn rolling_scope_ignores_future_records() {
        let now = wednesday(12);
        let ws = vec![one_set("next", wednesday(9) + Duration::days(1), minutes_set(10))];
        let rolling = calculate_weekly_progress(&ws, &now, WeekScope::Rolling7Days);
        assert!(rolling.iter().all(|b| b.minutes == 0));
    }

    #[test]
    fn weekday_uses_now_timezone() {
        // 23:30 UTC on Wednesday is Thursday in Tokyo.
        let created = Utc.with_ymd_and_hms(2025, 3, 5, 23, 30, 0).unwrap();
        let ws = vec![one_set("1", created, minutes_set(6))];

        let utc_now = Utc.with_ymd_and_hms(2025, 3, 6, 12, 0, 0).unwrap();
        let tokyo_now = utc_now.with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());

        let utc_week = calculate_weekly_progress(&ws, &utc_now, WeekScope::AllTime);
        let tokyo_week = calculate_weekly_progress(&ws, &tokyo_now, WeekScope::AllTime);
        assert_eq!(utc_week[2].minutes, 6);
        assert_eq!(tokyo_week[3].minutes, 6);
    }

    #[test]
    fn weekly_volume_by_created_day() {
        let now = wednesday(12);
        let ws = vec![
            one_set("1", wednesday(9), ExerciseSet::new(3, 10, 20.0, 60)),
            one_set("2", wednesday(9) - Duration::days(2), ExerciseSet::new(5, 5, 100.0, 180)),
        ];
        let volume = calculate_weekly_volume(&ws, &now, WeekScope::AllTime);
        assert_eq!(volume.days, DAYS);
        assert_eq!(volume.data, [2500.0, 0.0, 600.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(volume.total(), calculate_total_weight(&ws));
    }

    #[test]
    fn summary_for_listing() {
        let w = WorkoutRecord::new("9", "Supino e peito", wednesday(9))
            .with_set(ExerciseSet::new(3, 10, 20.0, 60))
            .with_set(ExerciseSet::new(4, 8, 50.0, 90));
        let summary = summarize_workout(&w);
        assert_eq!(summary.exercise_count, 2);
        assert_eq!(summary.minutes, 12);
        assert_eq!(summary.volume, 2200.0);
        // "peito" precedes "supino" in the catalog
        assert_eq!(summary.image_url, images::image_for("peito"));
    }

    #[test]
    fn listing_is_newest_first() {
        let ws = vec![
            WorkoutRecord::new("old", "Costas", wednesday(9) - Duration::days(14)),
            WorkoutRecord::new("new", "Pernas", wednesday(9)),
            WorkoutRecord::new("mid", "Ombros", wednesday(9) - Duration::days(2)),
            WorkoutRecord::new("new-too", "Cardio", wednesday(9)),
        ];
        let ids: Vec<String> = summarize_newest_first(&ws)
            .into_iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(ids, vec!["new", "new-too", "mid", "old"]);
        assert!(summarize_newest_first(&[]).is_empty());
    }

    #[test]
    fn exercise_image_follows_exercise_name() {
        assert_eq!(
            exercise_image(&ExerciseSet::new(3, 10, 20.0, 60).named("Agachamento livre")),
            images::image_for("agachamento")
        );
        assert_eq!(exercise_image(&ExerciseSet::new(3, 10, 20.0, 60)), images::DEFAULT_IMAGE);
    }

    #[test]
    fn sunday_now_marks_the_last_bucket() {
        // 2025-03-09 is a Sunday
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 20, 0, 0).unwrap();
        let ws = vec![one_set("sun", now - Duration::hours(2), minutes_set(5))];

        for scope in [WeekScope::AllTime, WeekScope::Rolling7Days] {
            let week = calculate_weekly_progress(&ws, &now, scope);
            let today: Vec<usize> = (0..7).filter(|&i| week[i].is_today).collect();
            assert_eq!(today, vec![6]);
            assert_eq!(week[6].day, Weekday::Sun);
            assert_eq!(week[6].minutes, 5);
            assert!(!week[0].is_today);
        }

        // Saturday 23:30 UTC is already Sunday at +02:00
        let east_now = Utc
            .with_ymd_and_hms(2025, 3, 8, 23, 30, 0)
            .unwrap()
            .with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        let week = calculate_weekly_progress(&[], &east_now, WeekScope::AllTime);
        assert!(week[6].is_today);
        assert!(!week[5].is_today);
    }
}
