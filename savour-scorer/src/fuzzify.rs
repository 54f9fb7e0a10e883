//! Fuzzify preference profiles into weighted category degrees.
#![forbid(unsafe_code)]

use log::{debug, warn};
use savour_core::{FuzzifiedProfile, FuzzyModel, PreferenceProfile};

use crate::ScoreError;

/// Map every preference onto weighted category degrees.
///
/// For each `(feature, {value, weight})` and each category of the feature the
/// degree is `membership(value) * weight`. Values outside the feature domain
/// are clamped. Weighted degrees are not clamped and exceed `1` for weights
/// above `1`.
///
/// # Errors
/// Returns [`ScoreError::UnknownFeature`] for the first profile feature the
/// model does not define.
///
/// # Examples
/// ```
/// use savour_core::{Domain, Feature, FuzzyModel, PreferenceProfile, Triangle};
/// use savour_scorer::fuzzify_profile;
///
/// let temperature = Feature::new("temperature", Domain::default())?
///     .with_category("warm", Triangle::new(30.0, 50.0, 70.0)?)?;
/// let model = FuzzyModel::new().with_feature(temperature)?;
/// let profile = PreferenceProfile::new().with_preference("temperature", 40.0, 2.0);
///
/// let fuzzified = fuzzify_profile(&model, &profile)?;
/// let warm = fuzzified.get("temperature").and_then(|set| set.get("warm"));
/// assert_eq!(warm, Some(1.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn fuzzify_profile(
    model: &FuzzyModel,
    profile: &PreferenceProfile,
) -> Result<FuzzifiedProfile, ScoreError> {
    let mut fuzzified = FuzzifiedProfile::new();
    for (name, preference) in profile.iter() {
        let feature = model
            .feature(name)
            .ok_or_else(|| ScoreError::UnknownFeature {
                feature: name.to_owned(),
            })?;
        if !feature.domain().contains(preference.value) {
            warn!(
                "preference value {} for feature '{name}' lies outside [{}, {}]; clamping",
                preference.value,
                feature.domain().min(),
                feature.domain().max()
            );
        }
        let degrees =
            feature.fuzzify_weighted(preference.value, preference.weight, model.evaluation());
        fuzzified.insert(name, degrees);
    }
    debug!("fuzzified {} preference(s)", fuzzified.len());
    Ok(fuzzified)
}
