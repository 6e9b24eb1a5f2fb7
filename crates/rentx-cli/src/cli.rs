//! CLI definition using clap

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use rentx_types::OutputFormat;

#[derive(Parser)]
#[command(name = "rentx")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Car rental desk: register cars and open rentals")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a rental
    Rent {
        /// User renting the car
        #[arg(long, short = 'u')]
        user: String,

        /// Car ID
        #[arg(long, short = 'c')]
        car: String,

        /// Rental length in days
        #[arg(long, short = 'd', conflicts_with = "return_at", required_unless_present = "return_at")]
        days: Option<u32>,

        /// Expected return instant (RFC 3339, e.g. 2024-05-01T10:00:00Z)
        #[arg(long)]
        return_at: Option<DateTime<Utc>>,
    },

    /// List rentals of a user
    Rentals {
        /// User ID
        #[arg(long, short = 'u')]
        user: String,
    },

    /// Manage the fleet
    Car {
        #[command(subcommand)]
        command: CarCommands,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,
    },
}

#[derive(Subcommand)]
pub enum CarCommands {
    /// Register a car
    Add(CarArgs),

    /// List registered cars
    List,

    /// Register every car in a TOML fleet file
    Import {
        /// Path to fleet TOML file
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct CarArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long)]
    pub brand: String,

    #[arg(long)]
    pub category: String,

    /// Fine per day of delay
    #[arg(long)]
    pub fine_amount: f64,

    #[arg(long)]
    pub daily_rate: f64,

    #[arg(long)]
    pub plate: String,
}
