//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "strecklista")]
#[command(about = "Count drink names per line and write a timestamped tally sheet", version)]
pub(crate) struct Cli {
    /// Text file(s) with one drink name per line (glob patterns allowed)
    #[arg(required = true, value_name = "INPUT")]
    pub(crate) inputs: Vec<String>,

    /// Combine several input files into a single tally sheet
    #[arg(short, long)]
    pub(crate) accumulate: bool,

    /// Directory to write the tally sheet to [default: current directory]
    #[arg(short = 'd', long, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Count and print without writing a tally sheet
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Ignore empty lines instead of counting them
    #[arg(long)]
    pub(crate) skip_blank: bool,

    /// Timezone for the sheet timestamp (e.g., "Europe/Stockholm", "UTC")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.accumulate && config.accumulate {
            self.accumulate = true;
        }
        if !self.skip_blank && config.skip_blank {
            self.skip_blank = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
