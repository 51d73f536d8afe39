//! Dungeon layout generator
//!
//! Command-line front end: builds a configuration, runs the pipeline once and
//! prints the layout.

use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};

use dg_core::{GenConfig, GenError, GenRng, Layout, generate};

/// Procedural dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "dungeon-gen")]
#[command(author, version, about = "Generate a connected dungeon layout", long_about = None)]
struct Args {
    /// JSON configuration file; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Grid side length
    #[arg(short = 's', long = "size")]
    size: Option<usize>,

    /// Number of rooms to attempt
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Smoothing passes
    #[arg(short = 'm', long = "smoothness")]
    smoothness: Option<usize>,

    /// Maximum room radius
    #[arg(long = "radius")]
    radius: Option<usize>,

    /// Seed (drawn from entropy and printed when omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Log pipeline progress to stderr (level from `RUST_LOG`, default debug)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

/// Writes records at or above the global max level to stderr
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(level) = log_level(args.verbose, env::var("RUST_LOG").ok().as_deref())
        && log::set_logger(&LOGGER).is_ok()
    {
        log::set_max_level(level);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dungeon-gen: {err}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` alone enables logging; `--verbose` without it means debug
fn log_level(verbose: bool, rust_log: Option<&str>) -> Option<LevelFilter> {
    match rust_log.and_then(|v| v.trim().parse::<LevelFilter>().ok()) {
        Some(level) => Some(level),
        None if verbose => Some(LevelFilter::Debug),
        None => None,
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = build_config(args)?;
    let layout = generate(&config)?;
    print_layout(&layout, args.format)
}

/// File values first, then flag overrides, then an entropy seed if none was given
fn build_config(args: &Args) -> Result<GenConfig, Box<dyn Error>> {
    let (mut config, file_seed) = match &args.config {
        Some(path) => load_config(path)?,
        None => (GenConfig::default(), false),
    };

    if let Some(size) = args.size {
        config.map_size = size;
    }
    if let Some(rooms) = args.rooms {
        config.room_goal = rooms;
    }
    if let Some(smoothness) = args.smoothness {
        config.smoothness = smoothness;
    }
    if let Some(radius) = args.radius {
        config.max_room_radius = radius;
    }

    match args.seed {
        Some(seed) => config.seed = seed,
        None if !file_seed => {
            config.seed = GenRng::from_entropy().seed();
            eprintln!("seed: {}", config.seed);
        }
        None => {}
    }

    config.validate()?;
    Ok(config)
}

/// Parse a config file, reporting whether it set a seed explicitly
fn load_config(path: &Path) -> Result<(GenConfig, bool), Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| GenError::Config(format!("{}: {e}", path.display())))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| GenError::Config(e.to_string()))?;
    let has_seed = value.get("seed").is_some();
    let config = GenConfig::from_json_str(&text)?;
    Ok((config, has_seed))
}

fn print_layout(layout: &Layout, format: Format) -> Result<(), Box<dyn Error>> {
    match format {
        Format::Ascii => print!("{}", layout.to_ascii()),
        Format::Json => println!("{}", serde_json::to_string_pretty(layout)?),
    }
    Ok(())
}
