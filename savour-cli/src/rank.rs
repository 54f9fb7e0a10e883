//! Rank command: score a catalog against a preference profile.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use savour_core::FuzzifiedProfile;
use savour_data::load_profile;
use savour_scorer::{Normalisation, Recommendation, Recommender};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::source::{resolve_catalog, resolve_model};
use crate::{
    ARG_RANK_CATALOG, ARG_RANK_MODEL, ARG_RANK_PROFILE, ARG_RANK_SHOW_FUZZIFIED, ARG_RANK_TOP,
    CliError, ENV_RANK_PROFILE,
};

/// Number of ranked entries reported when `--top` is not given.
pub(crate) const DEFAULT_TOP: usize = 3;

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a catalog against a JSON preference profile. The \
                 reference dish model and catalog are used unless model or \
                 catalog artefacts are given.",
    about = "Rank candidates against a preference profile"
)]
#[ortho_config(prefix = "SAVOUR")]
pub(crate) struct RankArgs {
    /// Path to a JSON preference profile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Path to a JSON model artefact.
    #[arg(long = ARG_RANK_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) model: Option<Utf8PathBuf>,
    /// Path to a JSON catalog artefact.
    #[arg(long = ARG_RANK_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of ranked entries to report.
    #[arg(long = ARG_RANK_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Include the fuzzified profile in the report.
    #[arg(
        long = ARG_RANK_SHOW_FUZZIFIED,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) show_fuzzified: Option<bool>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the profile artefact.
    pub(crate) profile: Utf8PathBuf,
    /// Model artefact; the reference model when `None`.
    pub(crate) model: Option<Utf8PathBuf>,
    /// Catalog artefact; the reference catalog when `None`.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of entries to report.
    pub(crate) top: usize,
    /// Whether to include the fuzzified profile.
    pub(crate) show_fuzzified: bool,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_RANK_PROFILE,
            env: ENV_RANK_PROFILE,
        })?;
        Ok(Self {
            profile,
            model: args.model,
            catalog: args.catalog,
            top: args.top.unwrap_or(DEFAULT_TOP),
            show_fuzzified: args.show_fuzzified.unwrap_or(false),
        })
    }
}

/// One reported ranking entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RankedEntry {
    /// 1-based rank.
    pub(crate) position: usize,
    /// Candidate name.
    pub(crate) name: String,
    /// Normalised score.
    pub(crate) score: f64,
    /// Score as a percentage of a perfect match.
    pub(crate) percent: f64,
}

/// Output of the `rank` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RankReport {
    /// How raw scores were normalised.
    pub(crate) normalisation: Normalisation,
    /// Best entries first.
    pub(crate) ranking: Vec<RankedEntry>,
    /// Weighted category degrees of the profile, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fuzzified: Option<FuzzifiedProfile>,
}

impl RankReport {
    fn new(recommendation: Recommendation, config: &RankConfig) -> Self {
        let ranking = recommendation
            .ranking
            .top(config.top)
            .iter()
            .zip(1_usize..)
            .map(|(entry, position)| RankedEntry {
                position,
                name: entry.name.clone(),
                score: entry.score,
                percent: entry.percent(),
            })
            .collect();
        Self {
            normalisation: recommendation.normalisation,
            ranking,
            fuzzified: config.show_fuzzified.then_some(recommendation.fuzzified),
        }
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_rank(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<RankReport, CliError> {
    let model = resolve_model(config.model.as_deref())?;
    let catalog = resolve_catalog(config.catalog.as_deref())?;
    let profile = load_profile(&config.profile)?;
    let recommender = Recommender::new(model, catalog);
    let recommendation = recommender.recommend(&profile)?;
    info!(
        "ranked {} candidate(s) for {}",
        recommendation.ranking.len(),
        config.profile
    );
    Ok(RankReport::new(recommendation, config))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
