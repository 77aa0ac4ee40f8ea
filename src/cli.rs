use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// circle-lab - validated containers and circles from the command line
#[derive(Parser, Debug)]
#[command(name = "circle-lab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the project/user lookup
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a container and describe it
    Describe {
        /// Container radius (defaults to container.radius from config)
        #[arg(short, long, allow_negative_numbers = true)]
        radius: Option<f64>,
    },

    /// Apply values to a container's hidden value, in order
    Write {
        /// Values to write; values below 10 are rejected
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Container radius (defaults to container.radius from config)
        #[arg(short, long, allow_negative_numbers = true)]
        radius: Option<f64>,
    },

    /// Build a circle and draw it
    Circle {
        /// Circle radius (defaults to container.radius from config)
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "literal")]
        radius: Option<f64>,

        /// Use the literal circle (radius 1 at (1, 1))
        #[arg(long)]
        literal: bool,

        /// Place the circle at this x coordinate
        #[arg(long, requires = "y", allow_negative_numbers = true)]
        x: Option<f64>,

        /// Place the circle at this y coordinate
        #[arg(long, requires = "x", allow_negative_numbers = true)]
        y: Option<f64>,
    },

    /// Show the effective configuration
    Config,
}
