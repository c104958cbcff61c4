//! Game configuration: a TOML file plus command-line overrides

use anyhow::{anyhow, bail, Context};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Who plays a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "h" => Ok(PlayerKind::Human),
            "random" | "computer" | "ai" => Ok(PlayerKind::Random),
            _ => Err(anyhow!("unknown player kind '{s}' (expected human or random)")),
        }
    }
}

/// Settings for one game
///
/// ```toml
/// white = "human"
/// black = "random"
/// show_board = true
/// max_plies = 0
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Print the board before every move
    pub show_board: bool,
    /// Stop after this many plies (0 = no limit)
    pub max_plies: u32,
    /// Seed for the random engine (None = fresh entropy)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Random,
            show_board: true,
            max_plies: 0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// File settings (or defaults) with command-line overrides on top
    pub fn resolve(opts: &CliOptions) -> anyhow::Result<Self> {
        let mut config = match &opts.config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(kind) = opts.white {
            config.white = kind;
        }
        if let Some(kind) = opts.black {
            config.black = kind;
        }
        if let Some(seed) = opts.seed {
            config.seed = Some(seed);
        }
        if let Some(plies) = opts.max_plies {
            config.max_plies = plies;
        }
        if opts.quiet {
            config.show_board = false;
        }
        Ok(config)
    }
}

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub white: Option<PlayerKind>,
    pub black: Option<PlayerKind>,
    pub seed: Option<u64>,
    pub max_plies: Option<u32>,
    pub quiet: bool,
    pub help: bool,
}

impl CliOptions {
    /// Parse arguments (without the program name)
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut opts = CliOptions::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--config" | "-c" => {
                    opts.config_path = Some(PathBuf::from(value(args, i)?));
                    i += 1;
                }
                "--white" | "-w" => {
                    opts.white = Some(value(args, i)?.parse()?);
                    i += 1;
                }
                "--black" | "-b" => {
                    opts.black = Some(value(args, i)?.parse()?);
                    i += 1;
                }
                "--seed" => {
                    let raw = value(args, i)?;
                    opts.seed = Some(raw.parse().with_context(|| format!("bad seed '{raw}'"))?);
                    i += 1;
                }
                "--max-plies" => {
                    let raw = value(args, i)?;
                    opts.max_plies =
                        Some(raw.parse().with_context(|| format!("bad ply limit '{raw}'"))?);
                    i += 1;
                }
                "--quiet" | "-q" => opts.quiet = true,
                "--help" | "-h" | "help" => opts.help = true,
                _ => bail!("unknown argument '{flag}'"),
            }
            i += 1;
        }
        Ok(opts)
    }
}

fn value(args: &[String], i: usize) -> anyhow::Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} needs a value", args[i]))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
