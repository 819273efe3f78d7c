use std::path::PathBuf;

use clap::{Parser, Subcommand};
use models::EnhancementKind;

use crate::config::Config;

/// Gloomhaven Enhancement Calculator
#[derive(Parser, Debug)]
#[command(name = "ghec", version)]
#[command(about = "Compute the gold cost of enhancing an ability card")]
pub struct Args {
    /// Config file (default is $HOME/.ghec.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Ability card level
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub level: Option<i32>,

    /// Number of current targets, or hexes for add attack hex
    #[arg(short, long, global = true)]
    pub targets: Option<u32>,

    /// Number of previous enhancements on the card
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub previous: Option<i32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Price one enhancement
    Cost {
        /// Enhancement kind, e.g. attack, add-target, add-attack-hex, summon-hp
        kind: EnhancementKind,

        /// Show base cost and surcharges separately
        #[arg(short, long)]
        breakdown: bool,
    },
    /// Price every enhancement kind
    List,
    /// Price the request described by a TOML file
    Quote {
        /// File with `kind` and optional `level`, `targets` and `previous`
        path: PathBuf,
    },
}

impl Args {
    /// Parameters given on the command line, taking precedence over the
    /// config file.
    pub fn overrides(&self) -> Config {
        Config {
            level: self.level,
            targets: self.targets,
            previous: self.previous,
        }
    }
}
