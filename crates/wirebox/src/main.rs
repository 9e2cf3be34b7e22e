//! wirebox - Entry Point
//!
//! Headless stand-in for the demo's presentation shell: builds the container,
//! wires the object graph, resolves the startup view models and drives the
//! counter the way a button press would.

use clap::Parser;
use tracing::info;

use wirebox::bootstrap::{build_view_models, setup_dependencies};
use wirebox::infrastructure::di::Container;
use wirebox::infrastructure::logging::init_logging;

/// Command line interface for the wirebox demo
#[derive(Parser, Debug)]
#[command(name = "wirebox")]
#[command(about = "wirebox - Dependency Injection Container Demo")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// How many times to trigger the counter increment
    #[arg(long, default_value_t = 3)]
    pub increments: u32,

    /// Print the final view-model state as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let container = Container::new();
    setup_dependencies(&container)?;
    let view_models = build_view_models(&container)?;

    info!(message = view_models.message.message(), "resolved greeting");
    for _ in 0..cli.increments {
        view_models.counter.increment();
        info!(count = view_models.counter.count(), "counter incremented");
    }

    if cli.json {
        let snapshot = serde_json::json!({
            "message": view_models.message.message(),
            "count": view_models.counter.count(),
        });
        println!("{snapshot}");
    } else {
        println!("{}", view_models.message.message());
        println!("Counter: {}", view_models.counter.count());
    }

    Ok(())
}
