//! frab2ht - Main entry point
//!
//! Fetches a frab conference schedule and speaker list, converts them to the
//! HackerTracker format, and writes the four collection files. Any failure
//! (fetch, parse, convert, serialize, write) aborts the run with a non-zero
//! exit status; there is no partial-output mode.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use frab2ht::convert::{self, RunContext, TIMESTAMP_FORMAT};
use frab2ht::fetch::FrabClient;
use frab2ht::{frab, hackertracker};

/// Command-line arguments for frab2ht
#[derive(Parser, Debug)]
#[command(name = "frab2ht")]
#[command(about = "Converts a frab conference schedule to HackerTracker JSON files")]
#[command(version)]
struct Args {
    /// Base URL of the frab conference (e.g. https://conf.example.org/2024)
    #[arg(short, long, env = "FRAB_URL")]
    frab: String,

    /// Directory to save output files to, created if missing
    #[arg(short, long, default_value = ".", env = "FRAB_SAVE_DIR")]
    save: PathBuf,

    /// Base ID added to every emitted object ID
    #[arg(short, long, default_value = "0", env = "FRAB_BASE_ID")]
    id: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting frab2ht v{}", env!("CARGO_PKG_VERSION"));

    // Captured once; identical on every record of the run.
    let ctx = RunContext {
        base_id: args.id,
        updated_at: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
    };

    let client = FrabClient::new(&args.frab)?;
    let schedule_body = client.schedule().await?;
    let speakers_body = client.speakers().await?;

    let schedule = frab::parse_schedule(&schedule_body)?;
    let speakers = frab::parse_speakers(&speakers_body)?;
    info!(
        "Converting schedule for {} ({})",
        schedule.schedule.conference.title, schedule.schedule.conference.acronym
    );

    let outputs = convert::convert(&schedule, &speakers, &ctx)?;
    info!(
        "Converted {} event types, {} locations, {} speakers, {} events",
        outputs.event_types.len(),
        outputs.locations.len(),
        outputs.speakers.len(),
        outputs.events.len()
    );

    fs::create_dir_all(&args.save)
        .with_context(|| format!("Failed to create output directory {}", args.save.display()))?;

    // The events file keeps the historical "schedule" envelope key.
    save_file(
        &args.save,
        "event_types.json",
        hackertracker::emit("event_types", &outputs.event_types)?,
    )?;
    save_file(
        &args.save,
        "locations.json",
        hackertracker::emit("locations", &outputs.locations)?,
    )?;
    save_file(
        &args.save,
        "speakers.json",
        hackertracker::emit("speakers", &outputs.speakers)?,
    )?;
    save_file(
        &args.save,
        "events.json",
        hackertracker::emit("schedule", &outputs.events)?,
    )?;

    info!("Done");
    Ok(())
}

fn save_file(dir: &Path, name: &str, data: Vec<u8>) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
