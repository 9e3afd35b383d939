//! tag-review: page through a folder of images and tag each as public or private
//!
//! Tags live in `preferences.json` next to the `images/` folder and are
//! written after every change.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod tags;

use tags::TagState;

#[derive(Parser)]
#[command(name = "tag-review")]
#[command(about = "Tag images as public or private", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing images/ and preferences.json (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review images one by one (u=public, r=private, d=untag, n/p=move, j=jump, q=quit)
    Review,

    /// List images in review order with their tags
    List {
        /// Filter: public, private or untagged
        #[arg(long, short, value_parser = parse_state)]
        state: Option<TagState>,
    },

    /// Show how many images are public, private and untagged
    Stats,

    /// Set or remove the tag of one image
    Tag {
        /// Image path as listed (e.g. images/foo.png)
        image: String,

        /// public, private or untagged
        #[arg(value_parser = parse_state)]
        state: TagState,
    },
}

fn parse_state(s: &str) -> std::result::Result<TagState, String> {
    TagState::parse(s).ok_or_else(|| format!("Invalid tag '{}'. Use public, private or untagged", s))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = config::Config::resolve(cli.root)?;

    match cli.command {
        Commands::Review => {
            commands::review::execute(&config)?;
        }

        Commands::List { state } => {
            let options = commands::list::ListOptions { state };
            if let Some(output) = commands::list::execute(&config, &options)? {
                println!("{}", output);
            }
        }

        Commands::Stats => {
            if let Some(output) = commands::stats::execute(&config)? {
                println!("{}", output);
            }
        }

        Commands::Tag { image, state } => {
            commands::tag::execute(&config, &image, state)?;
        }
    }

    Ok(())
}
