//! Command line front end over the segmenter and scorers.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::{init_logging, parse_level};

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Parse and validate a fragment count (1-10).
fn parse_max_parts(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("max parts must be at least 1".to_string())
    } else if n > crate::segmentation::config::MAX_PARTS {
        Err(format!(
            "max parts cannot exceed {}",
            crate::segmentation::config::MAX_PARTS
        ))
    } else {
        Ok(n)
    }
}

/// Postcraft - split long text into threads and score posts locally
#[derive(Parser, Debug)]
#[command(name = "postcraft")]
#[command(
    version,
    about = "Split long text into numbered threads and score posts with transparent heuristics",
    after_help = "\
Examples:
  postcraft split notes.txt                 Split a file into a thread
  postcraft split --max-parts 8 --no-cta    Read stdin, up to 8 posts, no call-to-action
  postcraft thread draft.txt                Score a thread written by hand (posts separated by ---)
  postcraft post --media https://example.com/a.png draft.txt
  postcraft init                            Write postcraft.json with default settings"
)]
pub struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true, env = "POSTCRAFT_CONFIG", default_value = "postcraft.json")]
    pub config: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split text into a numbered thread and score it
    Split {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Maximum number of posts (clamped to 3-10)
        #[arg(long, value_parser = parse_max_parts)]
        max_parts: Option<usize>,

        /// Don't prefix the first post with "Thread: "
        #[arg(long)]
        no_hook: bool,

        /// Don't append a call-to-action to the last post
        #[arg(long)]
        no_cta: bool,

        /// Seed for the call-to-action choice
        #[arg(long)]
        seed: Option<u64>,

        /// Store these split options as the new defaults
        #[arg(long)]
        save: bool,

        /// Output format: text, json, export
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "export"])]
        format: String,
    },

    /// Score an existing thread
    Thread {
        /// Input file (default: stdin); posts are separated by lines containing only ---
        input: Option<PathBuf>,

        /// Read a JSON array of strings instead
        #[arg(long)]
        json: bool,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Score a single post
    Post {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Attached media URL (repeatable)
        #[arg(long = "media")]
        media: Vec<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(parse_level(&cli.log_level));

    log_info!("postcraft {} starting", env!("CARGO_PKG_VERSION"));

    commands::dispatch(cli)
}
