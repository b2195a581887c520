use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use reelfeed_player::app::{self, AppConfig};
use reelfeed_player::catalog::demo_catalog;

#[derive(Parser, Debug)]
#[command(
    name = "reelfeed-player",
    about = "Replay scroll gestures against a simulated autoplay video feed"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mount the feed, replay a scroll script and print playback transitions
    Run {
        /// JSON scroll script; the built-in demo session when omitted
        #[arg(long, env = "REELFEED_SCRIPT_PATH")]
        script: Option<PathBuf>,
        /// JSON catalog (array of categories); the demo feed when omitted
        #[arg(long, env = "REELFEED_CATALOG_PATH")]
        catalog: Option<PathBuf>,
        /// TOML or JSON feed config; overrides REELFEED_CONFIG_PATH
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the demo catalog as JSON
    Catalog,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("reelfeed_player", LevelFilter::Debug)
        .filter_module("reelfeed_core", LevelFilter::Debug)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            script,
            catalog,
            config,
        } => {
            let app_config = match config {
                Some(path) => AppConfig::from_file(&path)?,
                None => AppConfig::from_environment()?,
            }
            .with_catalog_path(catalog)
            .with_script_path(script);

            let report = app::run(&app_config).await?;
            for transition in &report.transitions {
                println!("{}", app::render_transition(transition));
            }
            println!(
                "{} scroll event(s); final playing set: {:?}",
                report.scroll_events,
                report
                    .final_status
                    .playing
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
            );
        }
        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(&demo_catalog())?);
        }
    }

    Ok(())
}
