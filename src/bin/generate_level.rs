//! Level generator binary — builds one level and prints it as JSON.
//!
//! Usage: cargo run --bin generate_level -- [OPTIONS]
//!
//! Options:
//!   --seed <SEED>      Session seed (default: 0)
//!   --agents <N>       Number of agents (default: 2)
//!   --layout <NAME>    empty | walls | cave | towers (default: empty)
//!   --config <PATH>    JSON file overriding layout parameters

use std::path::PathBuf;
use std::process::ExitCode;

use voxel_layout::core::Result;
use voxel_layout::{LayoutConfig, LayoutType, LevelSession};

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let seed = parse_u64_arg(&args, "--seed").unwrap_or(0);
    let agents = parse_i32_arg(&args, "--agents").unwrap_or(2);
    let layout: LayoutType = parse_str_arg(&args, "--layout")
        .unwrap_or_else(|| "empty".to_string())
        .parse()?;

    let config = match parse_str_arg(&args, "--config") {
        Some(path) => LayoutConfig::from_json_file(&PathBuf::from(path))?,
        None => LayoutConfig::default(),
    };

    let mut session = LevelSession::new(agents, layout, config);
    session.seed(seed);
    let level = session.reset()?;

    println!("{}", serde_json::to_string_pretty(&level)?);
    Ok(())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
