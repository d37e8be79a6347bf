use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

/// Mingle: conversation-group matching for intern rosters.
///
/// Shuffles a CSV roster into fixed-size groups and annotates each group
/// with shared interests and repeated attributes to seed conversation.
/// The result is written as a JSON document for the rendering service.
#[derive(Parser)]
#[command(name = "mingle", version, about)]
struct Cli {
    /// Path to the roster CSV (header row naming fields, one row per person)
    roster: PathBuf,

    /// Number of people per group (the final group may hold fewer)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    group_size: u32,

    /// Path for the JSON match document
    output: PathBuf,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mingle=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = mingle::config::Config::load()?;
    let fields = config.field_table();

    info!(
        roster = %cli.roster.display(),
        group_size = cli.group_size,
        "Matching roster into groups"
    );

    let mut rng = rand::rng();
    let groups = mingle::pipeline::run(
        &cli.roster,
        cli.group_size as usize,
        &cli.output,
        &fields,
        &mut rng,
    )?;

    mingle::output::terminal::display_groups(&groups);

    println!(
        "{}",
        format!("Match document saved to: {}", cli.output.display()).bold()
    );

    Ok(())
}
