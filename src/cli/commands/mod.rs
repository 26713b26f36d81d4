//! Command implementations

pub mod merge;
pub mod shared;
pub mod stations;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch the parsed arguments to their command
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Merge(merge_args) => merge::run(merge_args),
        Commands::Stations(stations_args) => stations::run(stations_args),
    }
}
