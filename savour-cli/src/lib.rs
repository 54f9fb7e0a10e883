//! Command-line interface for the Savour matching engine.
//!
//! Subcommands write pretty JSON to stdout:
//! - `rank` scores a catalog against a preference profile;
//! - `curves` samples the membership curves of one feature;
//! - `describe` prints the model in the artefact format.
//!
//! Options are layered with `ortho_config`: CLI flags override `SAVOUR_*`
//! environment variables, which override configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod curves;
mod describe;
mod error;
mod output;
mod rank;
mod source;

pub use error::CliError;

use curves::{CurvesArgs, run_curves};
use describe::{DescribeArgs, run_describe};
use rank::{RankArgs, run_rank};

const ARG_RANK_PROFILE: &str = "profile";
const ARG_RANK_MODEL: &str = "model";
const ARG_RANK_CATALOG: &str = "catalog";
const ARG_RANK_TOP: &str = "top";
const ARG_RANK_SHOW_FUZZIFIED: &str = "show-fuzzified";
const ENV_RANK_PROFILE: &str = "SAVOUR_CMDS_RANK_PROFILE";
const ARG_CURVES_FEATURE: &str = "feature";
const ARG_CURVES_MODEL: &str = "model";
const ENV_CURVES_FEATURE: &str = "SAVOUR_CMDS_CURVES_FEATURE";
const ARG_DESCRIBE_MODEL: &str = "model";

/// Run the Savour CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when parsing, configuration, loading, scoring or
/// writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    dispatch(cli.command)
}

fn dispatch(command: Command) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => run_rank(args),
        Command::Curves(args) => run_curves(args),
        Command::Describe(args) => run_describe(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "savour",
    about = "Fuzzy preference matching for dish catalogs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a catalog against a preference profile.
    Rank(RankArgs),
    /// Print the sampled membership curves of a feature.
    Curves(CurvesArgs),
    /// Print the fuzzy model.
    Describe(DescribeArgs),
}

#[cfg(test)]
mod tests;
