use anyhow::{Context, Result};
use clap::Parser;

use myfit::cli::args::{Cli, Commands};
use myfit::cli::handlers::{self, Session};
use myfit::config::AppConfig;
use myfit::input::load_workouts;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Commands that never touch workout data
    match &cli.command {
        Some(Commands::Config { action }) => return handlers::handle_config(&config, action),
        Some(Commands::Image { name, all }) => {
            return handlers::handle_image(&config, name.as_deref(), *all, cli.json);
        }
        _ => {}
    }

    let session = Session::new(config, cli.now.as_deref(), cli.json)?;
    let source = handlers::resolve_input(cli.input.as_deref(), &session.config)?;

    if let Some(Commands::Check) = cli.command {
        return handlers::handle_check(&session, &source);
    }

    let workouts = load_workouts(&source)
        .with_context(|| format!("Loading workouts from {}", source.describe()))?;

    match cli.command {
        // No subcommand → home dashboard
        None => handlers::handle_dashboard(&session, &workouts)?,
        Some(Commands::Stats) => handlers::handle_stats(&session, &workouts)?,
        Some(Commands::Week { scope }) => {
            handlers::handle_week(&session, &workouts, scope.as_deref())?;
        }
        Some(Commands::Progress { period, scope }) => {
            handlers::handle_progress(&session, &workouts, &period, scope.as_deref())?;
        }
        Some(Commands::List) => handlers::handle_list(&session, &workouts)?,
        Some(Commands::Show { id }) => handlers::handle_show(&session, &workouts, &id)?,
        Some(Commands::Check | Commands::Config { .. } | Commands::Image { .. }) => unreachable!(),
    }

    Ok(())
}
