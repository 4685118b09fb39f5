use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "myfit", version, author, about = "Training minutes, calories and weekly charts from your workout log")]
pub struct Cli {
    /// Workout export (JSON array or {"data": [...]}); `-` reads stdin
    #[arg(short, long, global = true)]
    pub input: Option<String>,

    /// Evaluate as of this RFC 3339 instant instead of the current time
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimated active minutes and calories over all workouts
    Stats,
    /// Minutes trained per weekday, Monday to Sunday
    Week {
        /// Which workouts count: all or rolling (last 7 days)
        #[arg(long)]
        scope: Option<String>,
    },
    /// Lifted volume for a period, with a per-weekday chart
    Progress {
        /// Period: week, month, 3months, year
        #[arg(long, default_value = "week")]
        period: String,
        /// Which workouts the weekday chart counts: all or rolling
        #[arg(long)]
        scope: Option<String>,
    },
    /// One line per workout
    List,
    /// Workout detail with every exercise
    Show {
        /// Workout id
        id: String,
    },
    /// Resolve the cover image for a workout or exercise name
    Image {
        /// Name to match against the keyword catalog
        name: Option<String>,
        /// List every catalog keyword instead
        #[arg(long)]
        all: bool,
    },
    /// Validate the workout export and report every problem found
    Check,
    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
