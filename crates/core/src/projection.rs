//! Catalog-wide projection of per-kind metadata

use crate::registry::WidgetRegistry;
use widgetry_types::{WidgetTypeConfig, WidgetTypeConfigMap};

impl WidgetRegistry {
    /// Validations and property maps for every registered kind.
    ///
    /// Used to seed consumers that need the whole catalog at once, such as
    /// the property evaluation engine.
    pub fn widget_type_config_map(&self) -> WidgetTypeConfigMap {
        self.widget_types()
            .iter()
            .map(|kind| {
                let config = WidgetTypeConfig {
                    validations: self.validation_map(kind).clone(),
                    default_properties: self.default_properties_map(kind).clone(),
                    derived_properties: self.derived_properties_map(kind).clone(),
                    meta_properties: self.meta_properties_map(kind).clone(),
                };
                (kind.clone(), config)
            })
            .collect()
    }
}
