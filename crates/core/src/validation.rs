//! Baseline validation shared by every widget kind

use once_cell::sync::Lazy;
use widgetry_types::{ValidationMap, ValidationType};

/// Validation returned for kinds that never registered their own
pub static BASE_WIDGET_VALIDATION: Lazy<ValidationMap> = Lazy::new(|| {
    ValidationMap::from([
        ("isLoading".to_string(), ValidationType::Boolean),
        ("isVisible".to_string(), ValidationType::Boolean),
        ("isDisabled".to_string(), ValidationType::Boolean),
    ])
});

/// Baseline validation extended with kind-specific rules
pub fn with_base_validation<I, K>(rules: I) -> ValidationMap
where
    I: IntoIterator<Item = (K, ValidationType)>,
    K: Into<String>,
{
    let mut map = BASE_WIDGET_VALIDATION.clone();
    map.extend(rules.into_iter().map(|(k, v)| (k.into(), v)));
    map
}
