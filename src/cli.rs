use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::suggest::{MatchOptions, MatchStyle};

/// Interactive word autocomplete entry for the terminal
#[derive(Debug, Parser)]
#[command(name = "wordpop", version, about)]
pub struct Cli {
    /// Tab-separated word list, header row first
    pub wordlist: PathBuf,

    /// Column to read, by header name (default: first column)
    #[arg(short = 'c', long)]
    pub column: Option<String>,

    /// Case-insensitive matching
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Match anywhere in a candidate instead of its prefix
    #[arg(long)]
    pub contains: bool,

    /// Maximum visible suggestion rows
    #[arg(long)]
    pub height: Option<u16>,

    /// Join runs of N consecutive words into suggestions
    #[arg(short = 'n', long, default_value_t = 1)]
    pub ngram: usize,
}

impl Cli {
    /// Matching mode: config file defaults, CLI flags override.
    pub fn match_options(&self, config: &Config) -> MatchOptions {
        let style = if self.contains {
            MatchStyle::Substring
        } else {
            config.matching.style
        };

        MatchOptions {
            style,
            ignore_case: self.ignore_case || config.matching.ignore_case,
        }
    }

    pub fn list_height(&self, config: &Config) -> u16 {
        self.height.unwrap_or(config.list.height)
    }
}
