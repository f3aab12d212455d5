/*
 * Flock Viewer
 *
 * Interactive window for the flocking simulation. Boids flee the mouse
 * pointer and stay loosely inside the window. Parameters are adjustable
 * from the control panel.
 *
 * An optional TOML configuration is read from the path in FLOCK_CONFIG.
 * Log verbosity follows RUST_LOG (default: info).
 */

use anyhow::{Context, Result};
use flock::SimulationConfig;

const CONFIG_ENV: &str = "FLOCK_CONFIG";

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => SimulationConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {path:?}"))?,
        None => SimulationConfig::default(),
    };
    config.validate().context("invalid configuration")?;
    log::info!("{config:#?}");

    flock::app::run(config);

    Ok(())
}
