//! widgetry-types: Shared data types for the widgetry widget registry.
//!
//! This crate contains pure data types (widget kinds, skeletons, property
//! pane trees, property maps) that are shared across all widgetry crates.
//! They carry no registry state, making them suitable as a foundation layer.

pub mod kind;
pub mod pane;
pub mod properties;
pub mod render_mode;
pub mod skeleton;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use kind::{InvalidWidgetKind, WidgetKind};
pub use pane::{PanelChild, PanelChildren, PanelConfig, PropertyPaneConfig};
pub use properties::{
    DefaultPropertiesMap, DerivedPropertiesMap, MetaPropertiesMap, WidgetConfig,
    WidgetTypeConfig, WidgetTypeConfigMap,
};
pub use render_mode::{RenderMode, UnknownRenderMode};
pub use skeleton::{WidgetProps, WidgetSkeleton};
pub use validation::{ValidationMap, ValidationType};
