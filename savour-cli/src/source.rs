//! Resolve the model and catalog a command operates on.

use camino::Utf8Path;
use log::debug;
use savour_core::{Catalog, Feature, FuzzyModel};
use savour_data::{load_catalog, load_model, reference};

use crate::CliError;

/// Load the model at `path`, or the reference model when absent.
pub(crate) fn resolve_model(path: Option<&Utf8Path>) -> Result<FuzzyModel, CliError> {
    if let Some(model_path) = path {
        return Ok(load_model(model_path)?);
    }
    debug!("no model path given; using the reference model");
    reference::model().map_err(CliError::ReferenceModel)
}

/// Load the catalog at `path`, or the reference catalog when absent.
pub(crate) fn resolve_catalog(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    if let Some(catalog_path) = path {
        return Ok(load_catalog(catalog_path)?);
    }
    debug!("no catalog path given; using the reference catalog");
    reference::catalog().map_err(CliError::ReferenceCatalog)
}

/// Look up `name` in `model`.
pub(crate) fn require_feature<'m>(
    model: &'m FuzzyModel,
    name: &str,
) -> Result<&'m Feature, CliError> {
    model.feature(name).ok_or_else(|| CliError::UnknownFeature {
        feature: name.to_owned(),
    })
}
