//! Sprinkler CLI: presentation layer over the fuzzy core.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 CLI (this file, outer ring)              │
//! │  args ─▶ WateringService ─▶ notice / progress / pattern  │
//! │                                                          │
//! │  FileConfigStore (ConfigPort)   LogEventSink (EventSink) │
//! │  ─────────────── Port Trait Boundary ──────────────────  │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │   WateringCalculator (pure fuzzy inference)        │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Exit codes: 0 on success (including "no watering needed"), 2 on invalid
//! input, 1 on any other failure.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use sprinkler::adapters::file_config::FileConfigStore;
use sprinkler::adapters::log_sink::LogEventSink;
use sprinkler::app::ports::ConfigPort;
use sprinkler::app::service::WateringService;
use sprinkler::calculator::{InferenceTrace, Recommendation};
use sprinkler::config::WateringConfig;
use sprinkler::fuzzy::RuleOutcome;
use sprinkler::pattern::SprinklerPattern;
use sprinkler::progress::ProgressSchedule;

#[derive(Parser)]
#[command(name = "sprinkler", version, about = "Fuzzy-logic watering time calculator")]
struct Cli {
    /// JSON configuration file (defaults apply when absent)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend watering time and volume
    Calc {
        /// Soil moisture, 0-100
        #[arg(long, allow_negative_numbers = true)]
        moisture: f64,
        /// Ambient temperature in °C, 0-40
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        /// Play back a progress bar before printing the result
        #[arg(long)]
        progress: bool,
        /// Print membership degrees and rule weights (as JSON with --json)
        #[arg(long)]
        explain: bool,
        /// Emit the recommendation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe the sprinkler stream animation for a watering run
    Pattern {
        /// Watering duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: f64,
        /// Emit every stream point as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration, or write it to a file
    Config {
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => FileConfigStore::new(path)
            .load()
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WateringConfig::default(),
    };
    debug!("effective config: {config:?}");

    match cli.command {
        Command::Calc {
            moisture,
            temperature,
            progress,
            explain,
            json,
        } => calc(config, moisture, temperature, progress, explain, json),
        Command::Pattern { duration, json } => {
            if !duration.is_finite() || duration < 0.0 {
                eprintln!("Invalid Input: Duration must be a non-negative number of minutes.");
                return Ok(ExitCode::from(2));
            }
            let pattern = SprinklerPattern::new(duration, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&pattern)?);
            } else {
                println!(
                    "{} streams, {} frames at {} ms/frame",
                    pattern.streams.len(),
                    pattern.total_frames,
                    pattern.frame_interval_ms
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { write } => {
            match write {
                Some(path) => {
                    FileConfigStore::new(&path)
                        .save(&config)
                        .with_context(|| format!("writing config to {}", path.display()))?;
                    println!("Configuration written to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&config)?),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn calc(
    config: WateringConfig,
    moisture: f64,
    temperature: f64,
    progress: bool,
    explain: bool,
    json: bool,
) -> Result<ExitCode> {
    let service = WateringService::new(config).context("invalid configuration")?;
    let mut sink = LogEventSink::new();

    let trace = match service.inspect(moisture, temperature, &mut sink) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Invalid Input: {e}");
            return Ok(ExitCode::from(2));
        }
    };
    let rec = trace.recommendation;

    if json {
        if explain {
            println!("{}", serde_json::to_string_pretty(&trace)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&rec)?);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if explain {
        print_trace(&trace);
    }

    match rec {
        Recommendation::NoWateringNeeded { reason } => {
            println!("No Watering Needed: {}", reason.notice());
        }
        Recommendation::Water(result) => {
            if progress {
                play_progress(&service.progress_for(&rec))?;
            }
            println!("Recommended watering time: {:.2} minutes", result.duration_minutes);
            println!("Water volume: {:.2} liters", result.volume_liters);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr so stdout keeps only the recommendation.
fn print_trace(trace: &InferenceTrace) {
    let m = trace.moisture;
    let t = trace.temperature;
    eprintln!("moisture    dry={:.3} moderate={:.3} wet={:.3}", m.dry, m.moderate, m.wet);
    eprintln!("temperature low={:.3} moderate={:.3} high={:.3}", t.low, t.moderate, t.high);
    match trace.rules {
        RuleOutcome::Saturated => eprintln!("rules       saturated (skipped)"),
        RuleOutcome::Weights(w) => eprintln!(
            "rules       short={:.3} medium={:.3} long={:.3}",
            w.short, w.medium, w.long
        ),
    }
}

/// Draw a text progress bar, sleeping between ticks.  Runs strictly after
/// the calculation has returned.
fn play_progress(schedule: &ProgressSchedule) -> Result<()> {
    const WIDTH: usize = 40;
    let mut out = std::io::stderr().lock();
    for (i, tick) in schedule.ticks().enumerate() {
        if i > 0 {
            std::thread::sleep(schedule.interval());
        }
        let filled = usize::from(tick.percent) * WIDTH / 100;
        write!(
            out,
            "\r[{}{}] {:>3}%",
            "#".repeat(filled),
            " ".repeat(WIDTH - filled),
            tick.percent
        )?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
