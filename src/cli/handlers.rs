use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, FixedOffset};
use log::{debug, warn};
use serde::Serialize;

use crate::catalog::images;
use crate::cli::args::ConfigCommands;
use crate::config::AppConfig;
use crate::input::{read_unchecked, InputSource};
use crate::models::{DashboardStats, DayBucket, WeeklyVolume, WorkoutRecord, WorkoutSummary};
use crate::stats::{
    calculate_stats, calculate_total_weight, calculate_weekly_progress, calculate_weekly_volume,
    collect_issues, estimate_exercise_duration_minutes, exercise_image, filter_by_period,
    summarize_newest_first, summarize_workout, Period, WeekScope,
};
use crate::utils::format::{
    fit_width, format_exercise_details, format_minutes, format_number, format_weight, progress_bar,
};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        let color: &str = $color;
        print!("{}", color);
        print!($($arg)*);
        println!("{}", if color.is_empty() { "" } else { RESET });
    }};
}

const RESET: &str = "\x1b[0m";

struct Palette {
    green: &'static str,
    amber: &'static str,
    red: &'static str,
    dim: &'static str,
    bold: &'static str,
    accent: &'static str,
}

impl Palette {
    fn new(enabled: bool) -> Self {
        if enabled {
            Palette {
                green: "\x1b[32m",
                amber: "\x1b[33m",
                red: "\x1b[31m",
                dim: "\x1b[2m",
                bold: "\x1b[1m",
                accent: "\x1b[38;2;255;107;53m",
            }
        } else {
            Palette {
                green: "",
                amber: "",
                red: "",
                dim: "",
                bold: "",
                accent: "",
            }
        }
    }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Everything a command needs besides the workouts themselves.
pub struct Session {
    pub config: AppConfig,
    /// Evaluation instant on the wall clock used for weekday decisions
    pub now: DateTime<FixedOffset>,
    pub json: bool,
}

impl Session {
    pub fn new(config: AppConfig, now_arg: Option<&str>, json: bool) -> Result<Self> {
        let now = match now_arg {
            Some(s) => DateTime::parse_from_rfc3339(s)
                .with_context(|| format!("Parsing --now '{}' (expected RFC 3339)", s))?,
            None => config.now()?,
        };
        debug!("Evaluating as of {}", now.to_rfc3339());
        Ok(Session { config, now, json })
    }

    fn palette(&self) -> Palette {
        Palette::new(self.config.display.color && !self.json)
    }

    fn scope(&self, arg: Option<&str>) -> Result<WeekScope> {
        match arg {
            Some(s) => s.parse::<WeekScope>().map_err(|e| anyhow!(e)),
            None => Ok(self.config.week.scope),
        }
    }
}

pub fn resolve_input(arg: Option<&str>, config: &AppConfig) -> Result<InputSource> {
    if let Some(arg) = arg {
        return Ok(InputSource::from_arg(arg));
    }
    config
        .input
        .default_path
        .clone()
        .map(InputSource::File)
        .ok_or_else(|| {
            anyhow!("No workout data given. Pass --input FILE (or - for stdin), or set input.default_path in the config")
        })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Serializing output")?);
    Ok(())
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct StatsReport {
    workouts: usize,
    #[serde(flatten)]
    stats: DashboardStats,
}

#[derive(Serialize)]
struct WeekReport<'a> {
    as_of: DateTime<FixedOffset>,
    scope: WeekScope,
    buckets: &'a [DayBucket],
}

#[derive(Serialize)]
struct DashboardReport<'a> {
    #[serde(flatten)]
    stats: StatsReport,
    week: WeekReport<'a>,
}

pub fn handle_dashboard(session: &Session, workouts: &[WorkoutRecord]) -> Result<()> {
    let stats = calculate_stats(workouts);
    let scope = session.config.week.scope;
    let buckets = calculate_weekly_progress(workouts, &session.now, scope);

    if session.json {
        return print_json(&DashboardReport {
            stats: StatsReport {
                workouts: workouts.len(),
                stats,
            },
            week: WeekReport {
                as_of: session.now,
                scope,
                buckets: &buckets,
            },
        });
    }

    print_stats(session, workouts.len(), stats);
    print_week(session, scope, &buckets);
    Ok(())
}

pub fn handle_stats(session: &Session, workouts: &[WorkoutRecord]) -> Result<()> {
    let stats = calculate_stats(workouts);
    if session.json {
        return print_json(&StatsReport {
            workouts: workouts.len(),
            stats,
        });
    }
    print_stats(session, workouts.len(), stats);
    Ok(())
}

fn print_stats(session: &Session, count: usize, stats: DashboardStats) {
    let p = session.palette();
    println!();
    println_colored!(p.accent, "  Dashboard — {}", session.now.format("%Y-%m-%d"));
    println!();
    println!("  Workouts:   {}", count);
    println_colored!(p.bold, "  Active:     {}", format_minutes(stats.minutes));
    println_colored!(p.bold, "  Calories:   {} kcal", format_number(stats.calories as f64));
    println!();
}

// ─── Week ────────────────────────────────────────────────────────────────────

pub fn handle_week(session: &Session, workouts: &[WorkoutRecord], scope_arg: Option<&str>) -> Result<()> {
    let scope = session.scope(scope_arg)?;
    let buckets = calculate_weekly_progress(workouts, &session.now, scope);
    if session.json {
        return print_json(&WeekReport {
            as_of: session.now,
            scope,
            buckets: &buckets,
        });
    }
    print_week(session, scope, &buckets);
    Ok(())
}

fn print_week(session: &Session, scope: WeekScope, buckets: &[DayBucket]) {
    let p = session.palette();
    let width = session.config.display.bar_width;
    let language = session.config.week.language;

    let heading = match scope {
        WeekScope::AllTime => "Training by weekday (all workouts)",
        WeekScope::Rolling7Days => "Training by weekday (last 7 days)",
    };
    println_colored!(p.accent, "  {}", heading);
    println!();

    for bucket in buckets {
        let marker = if bucket.is_today { "▸" } else { " " };
        let line = format!(
            "  {} {} {}  {}",
            marker,
            fit_width(bucket.label(language), 4),
            progress_bar(bucket.percentage, width),
            format_minutes(bucket.minutes)
        );
        if bucket.is_today {
            println_colored!(p.bold, "{}", line);
        } else if bucket.minutes == 0 {
            println_colored!(p.dim, "{}", line);
        } else {
            println!("{}", line);
        }
    }

    let total: i64 = buckets.iter().map(|b| b.minutes).sum();
    println!();
    println_colored!(p.dim, "  Total: {}", format_minutes(total));
    println!();
}

// ─── Progress ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ProgressReport {
    period: Period,
    workouts: usize,
    total_weight: f64,
    #[serde(flatten)]
    stats: DashboardStats,
    weekly_volume: WeeklyVolume,
}

pub fn handle_progress(
    session: &Session,
    workouts: &[WorkoutRecord],
    period_arg: &str,
    scope_arg: Option<&str>,
) -> Result<()> {
    let period: Period = period_arg.parse().map_err(|e: String| anyhow!(e))?;
    let scope = session.scope(scope_arg)?;
    let in_period = filter_by_period(workouts, period, &session.now);
    debug!("{} of {} workouts fall in {}", in_period.len(), workouts.len(), period.as_str());

    let report = ProgressReport {
        period,
        workouts: in_period.len(),
        total_weight: calculate_total_weight(&in_period),
        stats: calculate_stats(&in_period),
        weekly_volume: calculate_weekly_volume(&in_period, &session.now, scope),
    };
    if session.json {
        return print_json(&report);
    }

    let p = session.palette();
    let language = session.config.week.language;
    let width = session.config.display.bar_width;

    println!();
    println_colored!(p.accent, "  Progress — {}", period);
    println!();
    println!("  Workouts:      {}", report.workouts);
    println_colored!(p.bold, "  Total lifted:  {}", format_weight(report.total_weight));
    println!("  Active:        {}", format_minutes(report.stats.minutes));
    println!("  Calories:      {} kcal", format_number(report.stats.calories as f64));
    println!();

    let peak = report.weekly_volume.peak().max(1.0);
    for (day, kg) in report.weekly_volume.days.iter().zip(report.weekly_volume.data) {
        let line = format!(
            "  {} {}  {}",
            fit_width(crate::stats::weekday::label(*day, language), 4),
            progress_bar(kg / peak * 100.0, width),
            format_weight(kg)
        );
        if kg == 0.0 {
            println_colored!(p.dim, "{}", line);
        } else {
            println!("{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Workouts ────────────────────────────────────────────────────────────────

pub fn handle_list(session: &Session, workouts: &[WorkoutRecord]) -> Result<()> {
    let summaries = summarize_newest_first(workouts);
    if session.json {
        return print_json(&summaries);
    }

    let p = session.palette();
    println!();
    if summaries.is_empty() {
        println_colored!(p.dim, "  No workouts yet");
        println!();
        return Ok(());
    }
    println_colored!(p.accent, "  Workouts ({})", summaries.len());
    println!();
    for s in &summaries {
        println!(
            "  {}  {}  {:>2} exercises  {:>7}  {}",
            fit_width(s.id.as_str(), 8),
            fit_width(&s.name, 24),
            s.exercise_count,
            format_minutes(s.minutes),
            format_weight(s.volume)
        );
    }
    println!();
    Ok(())
}

#[derive(Serialize)]
struct WorkoutDetail<'a> {
    workout: &'a WorkoutRecord,
    summary: WorkoutSummary,
    /// One per exercise, in display order
    exercise_images: Vec<&'static str>,
}

pub fn handle_show(session: &Session, workouts: &[WorkoutRecord], id: &str) -> Result<()> {
    let workout = workouts
        .iter()
        .find(|w| w.id.as_str() == id)
        .ok_or_else(|| anyhow!("Workout '{}' not found", id))?;
    let summary = summarize_workout(workout);
    let sets = workout.ordered_sets();
    if session.json {
        return print_json(&WorkoutDetail {
            workout,
            summary,
            exercise_images: sets.iter().map(|set| exercise_image(set)).collect(),
        });
    }

    let p = session.palette();
    let created = workout.created_at.with_timezone(&session.now.timezone());
    println!();
    println_colored!(p.accent, "  {}", workout.name);
    if let Some(description) = workout.description.as_deref().filter(|d| !d.is_empty()) {
        println_colored!(p.dim, "  {}", description);
    }
    println!();
    println!("  Created:    {}", created.format("%a %Y-%m-%d %H:%M"));
    if let Some(frequency) = workout.frequency.as_deref().filter(|f| !f.is_empty()) {
        println!("  Frequency:  {}", frequency);
    }
    println!("  Estimated:  {}", format_minutes(summary.minutes));
    println!("  Volume:     {}", format_weight(summary.volume));
    println_colored!(p.dim, "  Image:      {}", summary.image_url);
    println!();

    if workout.exercise_sets.is_empty() {
        println_colored!(p.dim, "  No exercises");
    }
    for (n, set) in sets.into_iter().enumerate() {
        println!(
            "  {:>2}. {}  {}  ~{:.1} min",
            n + 1,
            fit_width(set.display_name(), 22),
            format_exercise_details(set.sets, set.reps, set.weight, set.rest_seconds),
            estimate_exercise_duration_minutes(set)
        );
        println_colored!(p.dim, "      {}", exercise_image(set));
    }
    println!();
    Ok(())
}

// ─── Image ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ImageMatch<'a> {
    name: &'a str,
    url: &'static str,
}

pub fn handle_image(config: &AppConfig, name: Option<&str>, all: bool, json: bool) -> Result<()> {
    if all {
        if json {
            let entries: Vec<ImageMatch> = images::EXERCISE_IMAGES
                .iter()
                .map(|&(name, url)| ImageMatch { name, url })
                .collect();
            return print_json(&entries);
        }
        let p = Palette::new(config.display.color);
        println!();
        println_colored!(
            p.accent,
            "  Image catalog — {} keywords, {} pictures",
            images::EXERCISE_IMAGES.len(),
            images::all_images().len()
        );
        println!();
        for (keyword, url) in images::EXERCISE_IMAGES {
            println!("  {}  {}", fit_width(keyword, 16), url);
        }
        println!();
        return Ok(());
    }

    let name = name.ok_or_else(|| anyhow!("Give a name to match, or use --all"))?;
    let url = images::image_for(name);
    if json {
        return print_json(&ImageMatch { name, url });
    }
    println!("{}", url);
    Ok(())
}

// ─── Check ───────────────────────────────────────────────────────────────────

pub fn handle_check(session: &Session, source: &InputSource) -> Result<()> {
    let workouts = read_unchecked(source)
        .with_context(|| format!("Reading workouts from {}", source.describe()))?;
    let issues = collect_issues(&workouts);
    let p = session.palette();

    if session.json {
        let messages: Vec<String> = issues.iter().map(|e| e.to_string()).collect();
        print_json(&serde_json::json!({
            "workouts": workouts.len(),
            "issues": messages,
        }))?;
    } else if issues.is_empty() {
        println_colored!(p.green, "  ✓ {} workouts, no problems found", workouts.len());
    } else {
        println_colored!(
            p.red,
            "  ✗ {} problem(s) in {} workouts",
            issues.len(),
            workouts.len()
        );
        for issue in &issues {
            println_colored!(p.amber, "    {}", issue);
        }
    }

    if !issues.is_empty() {
        warn!("Workout export failed validation with {} issue(s)", issues.len());
        bail!("{} invalid record field(s) in {}", issues.len(), source.describe());
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, action: &ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            print!("{}", toml::to_string_pretty(config).context("Serializing config")?);
        }
        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path()?.display());
        }
        ConfigCommands::Init { force } => {
            let path = AppConfig::config_path()?;
            if path.exists() && !force {
                println!("Config already exists at {}. Use --force to overwrite.", path.display());
                return Ok(());
            }
            AppConfig::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
