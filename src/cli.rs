use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Travel time estimates from the visitor's position to each clinic
#[derive(Debug, Parser)]
#[command(name = "vetmap", version, about)]
pub struct Cli {
    /// Clinic list and estimator settings (TOML)
    #[arg(long, short, global = true, default_value = "vetmap.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the page, apply clicks, wait for the position and print the result
    Estimate {
        /// Clinic to click on, by name or index; repeatable
        #[arg(long = "select", short)]
        selections: Vec<String>,

        /// Print the final display state as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        geolocation: GeolocationArgs,
    },
    /// Estimates for every clinic at once
    Table {
        #[command(flatten)]
        geolocation: GeolocationArgs,
    },
    /// Read `select`/`list`/`show`/`quit` commands from stdin while the
    /// position request is in flight
    Interactive {
        #[command(flatten)]
        geolocation: GeolocationArgs,
    },
}

/// How the simulated environment answers the position request.
///
/// Without coordinates the environment has no geolocation at all.
#[derive(Debug, Clone, Args)]
pub struct GeolocationArgs {
    /// Visitor latitude in degrees
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Visitor longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Refuse the position request
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub deny: bool,

    /// Delay before the position is delivered, milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}
