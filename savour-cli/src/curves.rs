//! Curves command: sampled membership curves of one feature.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use savour_core::Feature;
use savour_data::DomainArtefact;
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::source::{require_feature, resolve_model};
use crate::{ARG_CURVES_FEATURE, ARG_CURVES_MODEL, CliError, ENV_CURVES_FEATURE};

/// CLI arguments for the `curves` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print every category curve of a feature sampled over its \
                 domain, ready for plotting.",
    about = "Print the membership curves of a feature"
)]
#[ortho_config(prefix = "SAVOUR")]
pub(crate) struct CurvesArgs {
    /// Feature whose curves are printed.
    #[arg(value_name = "feature")]
    #[serde(default)]
    pub(crate) feature: Option<String>,
    /// Path to a JSON model artefact.
    #[arg(long = ARG_CURVES_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) model: Option<Utf8PathBuf>,
}

/// Resolved `curves` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CurvesConfig {
    /// Feature name.
    pub(crate) feature: String,
    /// Model artefact; the reference model when `None`.
    pub(crate) model: Option<Utf8PathBuf>,
}

impl TryFrom<CurvesArgs> for CurvesConfig {
    type Error = CliError;

    fn try_from(args: CurvesArgs) -> Result<Self, Self::Error> {
        let feature = args.feature.ok_or(CliError::MissingArgument {
            field: ARG_CURVES_FEATURE,
            env: ENV_CURVES_FEATURE,
        })?;
        Ok(Self {
            feature,
            model: args.model,
        })
    }
}

/// One category and its sampled curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CurveReport {
    /// Category name.
    pub(crate) name: String,
    /// Triangle control points.
    pub(crate) points: [f64; 3],
    /// `[x, degree]` pairs over the domain grid.
    pub(crate) curve: Vec<[f64; 2]>,
}

/// Output of the `curves` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CurvesReport {
    /// Feature name.
    pub(crate) feature: String,
    /// Human readable feature name.
    pub(crate) display_name: String,
    /// Domain the curves are sampled over.
    pub(crate) domain: DomainArtefact,
    /// Categories in declaration order.
    pub(crate) categories: Vec<CurveReport>,
}

impl From<&Feature> for CurvesReport {
    fn from(feature: &Feature) -> Self {
        let categories = feature
            .categories()
            .iter()
            .map(|category| CurveReport {
                name: category.name().to_owned(),
                points: category.triangle().points(),
                curve: category
                    .curve()
                    .points()
                    .map(|(x, degree)| [x, degree])
                    .collect(),
            })
            .collect();
        Self {
            feature: feature.name().to_owned(),
            display_name: feature.display_name(),
            domain: DomainArtefact::from(feature.domain()),
            categories,
        }
    }
}

pub(crate) fn run_curves(args: CurvesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_curves_with(args, &mut stdout)
}

pub(crate) fn run_curves_with(args: CurvesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = CurvesConfig::try_from(merged)?;
    let report = execute_curves(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_curves(config: &CurvesConfig) -> Result<CurvesReport, CliError> {
    let model = resolve_model(config.model.as_deref())?;
    let feature = require_feature(&model, &config.feature)?;
    Ok(CurvesReport::from(feature))
}
