//! Describe command: print the model as an artefact.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use savour_data::ModelArtefact;
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::source::resolve_model;
use crate::{ARG_DESCRIBE_MODEL, CliError};

/// CLI arguments for the `describe` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print every feature with its domain and category triangles \
                 in the model artefact format. Without a model path the \
                 reference model is printed, which is a convenient starting \
                 point for a custom model.",
    about = "Print the fuzzy model"
)]
#[ortho_config(prefix = "SAVOUR")]
pub(crate) struct DescribeArgs {
    /// Path to a JSON model artefact.
    #[arg(long = ARG_DESCRIBE_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) model: Option<Utf8PathBuf>,
}

pub(crate) fn run_describe(args: DescribeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_describe_with(args, &mut stdout)
}

pub(crate) fn run_describe_with(
    args: DescribeArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let model = resolve_model(merged.model.as_deref())?;
    write_json(writer, &ModelArtefact::from(&model))
}
