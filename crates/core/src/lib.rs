//! widgetry-core: Core traits and registry for widgetry.
//!
//! This crate contains the builder traits, the property pane annotator,
//! the `WidgetRegistry` catalog with its instantiation and projection
//! operations, and the error taxonomy they report.

pub mod annotate;
mod builder;
mod error;
pub mod id_gen;
mod instantiate;
mod projection;
mod registry;
pub mod validation;

#[cfg(test)]
mod testing;

pub use annotate::{annotate_pane_config, collect_ids};
pub use builder::{BoxedWidget, Widget, WidgetBuilder};
pub use error::{MetadataMap, RegistryError};
pub use id_gen::{generate_key, generate_key_with_prefix};
pub use registry::{WidgetRegistration, WidgetRegistry};
pub use validation::BASE_WIDGET_VALIDATION;

// Re-export types used in trait signatures for convenience
pub use widgetry_types::{
    DefaultPropertiesMap, DerivedPropertiesMap, MetaPropertiesMap, PanelChild, PanelChildren, PanelConfig,
    PropertyPaneConfig, RenderMode, ValidationMap, ValidationType, WidgetConfig, WidgetKind,
    WidgetProps, WidgetSkeleton, WidgetTypeConfig, WidgetTypeConfigMap,
};
