//! Conditions reported by the registry
//!
//! None of these abort the caller: reads fall back to defaults, writes are
//! discarded, and the condition is logged.

use std::fmt;
use widgetry_types::WidgetKind;

/// Per-kind metadata map consulted by a getter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataMap {
    Validation,
    DerivedProperties,
    DefaultProperties,
    MetaProperties,
    PaneConfig,
}

impl fmt::Display for MetadataMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetadataMap::Validation => "validation",
            MetadataMap::DerivedProperties => "derived properties",
            MetadataMap::DefaultProperties => "default properties",
            MetadataMap::MetaProperties => "meta properties",
            MetadataMap::PaneConfig => "property pane config",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("widget {0} is already registered")]
    DuplicateRegistration(WidgetKind),

    #[error("widget {kind} has no {map} defined")]
    MissingMetadata { kind: WidgetKind, map: MetadataMap },

    /// Carries the raw tag, which may not be a valid kind at all
    #[error("widget builder not registered for widget type {0:?}")]
    BuilderNotRegistered(String),

    #[error("widget builder for {kind} failed to build {widget_id}: {source}")]
    BuildFailed {
        kind: WidgetKind,
        widget_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("panel config under {label:?} has non-array children; left unannotated")]
    MalformedPaneConfig { label: String },

    #[error("registry is sealed; rejected write for {0}")]
    Sealed(WidgetKind),
}
