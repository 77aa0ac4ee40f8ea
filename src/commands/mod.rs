//! Command handlers.
//!
//! Each handler takes the shared [`Session`] and writes its result to stdout,
//! as text or as NDJSON events.

pub mod circle;
pub mod config;
pub mod describe;
pub mod write;

use std::path::PathBuf;

use circle_lab::config::{load_or_default, load_with_warnings, with_env_overrides};
use circle_lab::config::{LoadedConfig, SkippedConfig};
use circle_lab::{Config, ConfigWarning, LabResult, OutputFormat};

use crate::cli::{Cli, Commands};
use crate::ui::log::Logger;

/// Everything a command needs besides its own arguments
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Config files that exist but were passed over
    pub skipped: Vec<SkippedConfig>,
    pub json: bool,
    pub log: Logger,
}

impl Session {
    /// Resolve configuration and output mode from the command line.
    ///
    /// `--config` must point at a readable file; without it the project and
    /// user files are tried in order and unreadable ones are skipped.
    pub fn from_cli(cli: &Cli) -> LabResult<Self> {
        let LoadedConfig {
            config,
            source,
            warnings,
            skipped,
        } = match &cli.config {
            Some(path) => {
                let (config, warnings) = load_with_warnings(path)?;
                LoadedConfig {
                    config: with_env_overrides(config),
                    source: Some(path.clone()),
                    warnings,
                    skipped: Vec::new(),
                }
            }
            None => {
                let cwd = std::env::current_dir()?;
                load_or_default(Some(&cwd))
            }
        };

        let json = cli.json || config.output.format == OutputFormat::Json;
        let log = Logger::new(config.output.verbosity.bumped(cli.verbose));

        Ok(Self {
            config,
            source,
            warnings,
            skipped,
            json,
            log,
        })
    }

    /// Radius from the command line, else from config
    pub fn radius(&self, flag: Option<f64>) -> f64 {
        flag.unwrap_or(self.config.container.radius)
    }
}

/// Name used in JSON events for a command
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Describe { .. } => "describe",
        Commands::Write { .. } => "write",
        Commands::Circle { .. } => "circle",
        Commands::Config => "config",
    }
}

pub fn dispatch(command: Commands, session: &Session) -> anyhow::Result<()> {
    match command {
        Commands::Describe { radius } => describe::cmd_describe(session, radius),
        Commands::Write { values, radius } => write::cmd_write(session, &values, radius),
        Commands::Circle {
            radius,
            literal,
            x,
            y,
        } => circle::cmd_circle(session, radius, literal, x.zip(y)),
        Commands::Config => config::cmd_config(session),
    }
}
