//! JSON artefact formats and their conversion into engine types.
#![forbid(unsafe_code)]

use std::collections::{BTreeMap, HashSet};

use savour_core::{
    Candidate, Catalog, Domain, Evaluation, Feature, FuzzyModel, ModelError, PreferenceProfile,
    Triangle,
};
use serde::{Deserialize, Serialize};

use crate::ArtefactError;

const fn default_resolution() -> f64 {
    1.0
}

const fn default_weight() -> f64 {
    1.0
}

/// Bounded crisp range with a sampling step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainArtefact {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Sampling step; defaults to `1`.
    #[serde(default = "default_resolution")]
    pub resolution: f64,
}

impl From<&Domain> for DomainArtefact {
    fn from(domain: &Domain) -> Self {
        Self {
            min: domain.min(),
            max: domain.max(),
            resolution: domain.resolution(),
        }
    }
}

impl TryFrom<DomainArtefact> for Domain {
    type Error = ModelError;

    fn try_from(artefact: DomainArtefact) -> Result<Self, Self::Error> {
        Ok(Self::new(artefact.min, artefact.max, artefact.resolution)?)
    }
}

/// A fuzzy category and its triangle control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryArtefact {
    /// Category name.
    pub name: String,
    /// Triangle control points `[a, b, c]`.
    pub points: [f64; 3],
}

/// A feature, its optional domain override and its categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureArtefact {
    /// Feature name.
    pub name: String,
    /// Domain override; the model domain applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainArtefact>,
    /// Categories in declaration order.
    pub categories: Vec<CategoryArtefact>,
}

/// Serialised [`FuzzyModel`].
///
/// # Examples
/// ```
/// use savour_core::FuzzyModel;
/// use savour_data::ModelArtefact;
///
/// let artefact: ModelArtefact = serde_json::from_str(
///     r#"{"features": [{"name": "price", "categories": [
///         {"name": "cheap", "points": [0, 0, 40]}
///     ]}]}"#,
/// )?;
/// let model = FuzzyModel::try_from(artefact)?;
/// assert!(model.feature("price").is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelArtefact {
    /// Evaluation strategy; defaults to sampled.
    #[serde(default)]
    pub evaluation: Evaluation,
    /// Default domain for features without an override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainArtefact>,
    /// Features in declaration order.
    pub features: Vec<FeatureArtefact>,
}

impl TryFrom<ModelArtefact> for FuzzyModel {
    type Error = ArtefactError;

    fn try_from(artefact: ModelArtefact) -> Result<Self, Self::Error> {
        let default_domain = artefact
            .domain
            .map(Domain::try_from)
            .transpose()?
            .unwrap_or_default();
        let mut model = Self::new().with_evaluation(artefact.evaluation);
        for definition in artefact.features {
            let domain = definition
                .domain
                .map(Domain::try_from)
                .transpose()?
                .unwrap_or(default_domain);
            model.add_feature(build_feature(definition.name, domain, definition.categories)?)?;
        }
        Ok(model)
    }
}

fn build_feature(
    name: String,
    domain: Domain,
    categories: Vec<CategoryArtefact>,
) -> Result<Feature, ModelError> {
    let mut feature = Feature::new(name, domain)?;
    for category in categories {
        let [a, b, c] = category.points;
        let triangle = Triangle::new(a, b, c).map_err(|source| ModelError::Membership {
            feature: feature.name().to_owned(),
            category: category.name.clone(),
            source,
        })?;
        feature.add_category(category.name, triangle)?;
    }
    Ok(feature)
}

impl From<&FuzzyModel> for ModelArtefact {
    fn from(model: &FuzzyModel) -> Self {
        let features = model
            .features()
            .iter()
            .map(|feature| FeatureArtefact {
                name: feature.name().to_owned(),
                domain: Some(DomainArtefact::from(feature.domain())),
                categories: feature
                    .categories()
                    .iter()
                    .map(|category| CategoryArtefact {
                        name: category.name().to_owned(),
                        points: category.triangle().points(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            evaluation: model.evaluation(),
            domain: None,
            features,
        }
    }
}

/// A candidate and its crisp feature values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CandidateArtefact {
    /// Candidate name.
    pub name: String,
    /// Crisp values keyed by feature name.
    #[serde(default)]
    pub attributes: BTreeMap<String, f64>,
}

/// Serialised [`Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogArtefact {
    /// Candidates in catalog order.
    pub candidates: Vec<CandidateArtefact>,
}

impl TryFrom<CatalogArtefact> for Catalog {
    type Error = ArtefactError;

    fn try_from(artefact: CatalogArtefact) -> Result<Self, Self::Error> {
        let candidates = artefact.candidates.into_iter().map(|definition| {
            definition
                .attributes
                .into_iter()
                .fold(Candidate::new(definition.name), |candidate, (feature, value)| {
                    candidate.with_attribute(feature, value)
                })
        });
        Ok(Self::new(candidates)?)
    }
}

/// One preference: a target value and an importance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferenceArtefact {
    /// Feature the preference applies to.
    pub feature: String,
    /// Desired crisp value.
    pub value: f64,
    /// Importance weight in `0..=2`; defaults to `1`.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// Serialised [`PreferenceProfile`].
///
/// Weights outside `0..=2` are rejected rather than clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileArtefact {
    /// Preferences in declaration order.
    pub preferences: Vec<PreferenceArtefact>,
}

impl TryFrom<ProfileArtefact> for PreferenceProfile {
    type Error = ArtefactError;

    fn try_from(artefact: ProfileArtefact) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(artefact.preferences.len());
        let mut profile = Self::new();
        for preference in artefact.preferences {
            if !seen.insert(preference.feature.clone()) {
                return Err(ArtefactError::DuplicatePreference {
                    feature: preference.feature,
                });
            }
            profile.try_set_preference(preference.feature, preference.value, preference.weight)?;
        }
        Ok(profile)
    }
}
