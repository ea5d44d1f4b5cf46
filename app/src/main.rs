use std::path::PathBuf;

use anyhow::{Context, Result};
use aura_core::{DisplayConfig, Series, resolve_title};
use aura_ui::{ShellOptions, init_logging, launch_shell};
use clap::{Parser, Subcommand};
use tracing::info;

mod input;
use input::parse_activity;

#[derive(Parser, Debug)]
#[command(name = "aura", about = "Aura desktop shell")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the shell window.
    Shell {
        /// Route to open first.
        #[arg(long, default_value = "/feed")]
        path: String,

        /// Comma-separated activity samples for the Data Aura chart (e.g. 3,5,2,8).
        #[arg(long, value_parser = parse_activity)]
        activity: Option<Series>,

        /// JSON file with label, sublabel, colorStart, colorMid and colorEnd.
        #[arg(long)]
        chart_config: Option<PathBuf>,
    },
    /// Print the window title each path resolves to.
    Title {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::Shell {
            path,
            activity,
            chart_config,
        } => {
            let chart_config = match chart_config {
                Some(file) => DisplayConfig::load(&file)
                    .with_context(|| format!("failed to load chart config {}", file.display()))?,
                None => DisplayConfig::default(),
            };
            let options = ShellOptions {
                initial_path: path.into(),
                activity: activity.unwrap_or_default(),
                chart_config,
            };
            launch_shell(options);
        }
        Command::Title { paths } => {
            for path in paths {
                let title = resolve_title(&path);
                info!(%path, title, "resolved");
                println!("{path}\t{title}");
            }
        }
    }

    Ok(())
}
