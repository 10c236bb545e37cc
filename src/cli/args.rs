//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::Config;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "jsdemo")]
#[command(about = "Generate a daily self-contained canvas demo release", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Generate options used when no subcommand is given
    #[command(flatten)]
    pub(crate) generate: GenerateArgs,

    /// Path to a TOML config file (default: search standard locations)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Output as JSON (releases listing)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Disable colored table output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

/// Options for the `generate` command
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct GenerateArgs {
    /// Output directory for the demo and readme
    #[arg(short, long, value_name = "DIR")]
    pub(crate) out_dir: Option<PathBuf>,

    /// Override the UTC date stamp (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long)]
    pub(crate) date: Option<String>,

    /// Recent commits log fed into the prompt
    #[arg(long, value_name = "PATH")]
    pub(crate) commits: Option<PathBuf>,

    /// Recent inspirations log fed into the prompt
    #[arg(long, value_name = "PATH")]
    pub(crate) inspirations: Option<PathBuf>,

    /// System prompt file
    #[arg(long, value_name = "PATH")]
    pub(crate) system_prompt: Option<PathBuf>,

    /// Model name (overrides OPENAI_MODEL)
    #[arg(short, long)]
    pub(crate) model: Option<String>,

    /// Chat completion endpoint URL (overrides OPENAI_API_URL)
    #[arg(long, value_name = "URL")]
    pub(crate) endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,
}

/// Options for the `publish` command
#[derive(Debug, Clone, Args)]
pub(crate) struct PublishArgs {
    /// Release date (YYYYMMDD or YYYY-MM-DD)
    pub(crate) date: String,

    /// Release sequence number
    pub(crate) seq: String,

    /// Release title
    pub(crate) title: String,

    /// Directory holding the generated artifacts
    #[arg(long, value_name = "DIR")]
    pub(crate) dist: Option<PathBuf>,

    /// Root of the static pages tree
    #[arg(long, value_name = "DIR")]
    pub(crate) pages_root: Option<PathBuf>,
}

/// Options for the `cover` command
#[derive(Debug, Clone, Args)]
pub(crate) struct CoverArgs {
    /// Release date (YYYYMMDD or YYYY-MM-DD)
    pub(crate) date: String,

    /// Output directory for the cover image
    #[arg(short, long, value_name = "DIR")]
    pub(crate) out_dir: Option<PathBuf>,
}

/// Options for the `releases` command
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct ReleasesArgs {
    /// Search by date (YYYYMMDD), year/month prefix, seq or text
    pub(crate) query: Option<String>,

    /// Root of the static pages tree
    #[arg(long, value_name = "DIR")]
    pub(crate) pages_root: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        self.command = Some(match self.command.take() {
            None => Commands::Generate(self.generate.clone().with_config(config)),
            Some(Commands::Generate(args)) => Commands::Generate(args.with_config(config)),
            Some(Commands::Publish(mut args)) => {
                if args.dist.is_none() {
                    args.dist = config.out_dir.clone();
                }
                if args.pages_root.is_none() {
                    args.pages_root = config.pages_root.clone();
                }
                Commands::Publish(args)
            }
            Some(Commands::Cover(mut args)) => {
                if args.out_dir.is_none() {
                    args.out_dir = config.out_dir.clone();
                }
                Commands::Cover(args)
            }
            Some(Commands::Releases(mut args)) => {
                if args.pages_root.is_none() {
                    args.pages_root = config.pages_root.clone();
                }
                Commands::Releases(args)
            }
        });

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl GenerateArgs {
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Paths and timeout only; model and endpoint sit below the
        // environment and are resolved in GeneratorSettings
        if self.out_dir.is_none() {
            self.out_dir = config.out_dir.clone();
        }
        if self.commits.is_none() {
            self.commits = config.commits.clone();
        }
        if self.inspirations.is_none() {
            self.inspirations = config.inspirations.clone();
        }
        if self.system_prompt.is_none() {
            self.system_prompt = config.system_prompt.clone();
        }
        if self.timeout.is_none() {
            self.timeout = config.timeout_secs;
        }

        self
    }
}
