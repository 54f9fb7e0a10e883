//! Read artefacts from UTF-8 paths.
#![forbid(unsafe_code)]

use std::io::BufReader;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use savour_core::{Catalog, FuzzyModel, PreferenceProfile};
use serde::de::DeserializeOwned;

use crate::{ArtefactError, CatalogArtefact, DataError, ModelArtefact, ProfileArtefact};

/// Decode a JSON artefact of type `T` from `path`.
///
/// # Errors
/// Returns [`DataError::Open`] when the file cannot be opened and
/// [`DataError::Decode`] when its contents do not match `T`.
pub fn read_artefact<T>(path: &Utf8Path) -> Result<T, DataError>
where
    T: DeserializeOwned,
{
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        DataError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn convert<A, T>(path: &Utf8Path) -> Result<T, DataError>
where
    A: DeserializeOwned,
    T: TryFrom<A, Error = ArtefactError>,
{
    let artefact: A = read_artefact(path)?;
    T::try_from(artefact).map_err(|source| DataError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a fuzzy model from a JSON model artefact.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read, decoded or validated.
pub fn load_model(path: &Utf8Path) -> Result<FuzzyModel, DataError> {
    let model: FuzzyModel = convert::<ModelArtefact, _>(path)?;
    debug!("loaded {} feature(s) from {path}", model.len());
    Ok(model)
}

/// Load a catalog from a JSON catalog artefact.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read, decoded or validated.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, DataError> {
    let catalog: Catalog = convert::<CatalogArtefact, _>(path)?;
    debug!("loaded {} candidate(s) from {path}", catalog.len());
    Ok(catalog)
}

/// Load a preference profile from a JSON profile artefact.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read, decoded or validated.
/// Weights outside `0..=2` are validation failures.
pub fn load_profile(path: &Utf8Path) -> Result<PreferenceProfile, DataError> {
    let profile: PreferenceProfile = convert::<ProfileArtefact, _>(path)?;
    debug!("loaded {} preference(s) from {path}", profile.len());
    Ok(profile)
}
