pub mod check;
pub mod fleet;
pub mod matrix;

use clap::{ArgAction, Parser, Subcommand};
use haulr_common::vehicle::spec::VehicleSpec;

#[derive(Parser)]
#[command(name = "haulr")]
#[command(version, about = "Which vehicle can carry which.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Reduce output (-q hides headers, -qq prints verdicts only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
    /// Cargo must be strictly smaller than the space it goes into
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a carrier can take a cargo aboard
    #[command(alias = "c")]
    Check {
        /// Carrier spec, e.g. `wagon` or `wagon:9:12x2.5x3.8:20:9x2.4x2.6`
        carrier: VehicleSpec,
        /// Cargo spec, e.g. `car` or `parcel:0.3:1.2x0.8x1`
        cargo: VehicleSpec,
    },
    /// Show the default vehicle of every kind
    #[command(alias = "f")]
    Fleet,
    /// Check every vehicle against every other (defaults to the whole fleet)
    #[command(alias = "m")]
    Matrix { vehicles: Vec<VehicleSpec> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
