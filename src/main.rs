#![warn(clippy::all)]

//! Command line front end: styles overlay data or assembles credits.

use clap::{Parser, Subcommand};
use overlay_styler::credits::Credits;
use overlay_styler::overlay::StyledElement;
use overlay_styler::render::{Styler, StylerConfig};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "overlay-styler", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive render records from a JSON array of styled elements
    Style {
        input: PathBuf,
        /// Styler settings as JSON; defaults are used if missing or invalid
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Assemble the credits from the credits_*.yaml files in a directory
    Credits {
        dir: PathBuf,
        #[arg(long, default_value = "and more")]
        and_more: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Style {
            input,
            config,
            pretty,
        } => {
            let config = match config {
                Some(path) => StylerConfig::load_or_default(path),
                None => StylerConfig::default(),
            };
            let json = std::fs::read_to_string(&input)?;
            let features: Vec<StyledElement> = serde_json::from_str(&json)?;
            log::info!("Read {} styled elements from {}", features.len(), input.display());

            let mut styler = Styler::new(config);
            styler.set(&features);
            let records = styler.layer().features();
            let out = if pretty {
                serde_json::to_string_pretty(records)?
            } else {
                serde_json::to_string(records)?
            };
            println!("{}", out);
        }
        Command::Credits { dir, and_more } => {
            let credits = Credits::load_dir(&dir, &and_more)?;
            print!("{}", credits.to_html());
        }
    }
    Ok(())
}
