//! Per-kind property maps and catalog summaries

use crate::kind::WidgetKind;
use crate::validation::ValidationMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Derived property name -> formula evaluated outside the registry
pub type DerivedPropertiesMap = BTreeMap<String, String>;

/// Property name -> name of the property it takes its default from
pub type DefaultPropertiesMap = BTreeMap<String, String>;

/// Transient runtime state keys and their initial values
pub type MetaPropertiesMap = BTreeMap<String, Value>;

/// Default configuration used when a widget of this kind is dropped on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(rename = "type")]
    pub widget_type: WidgetKind,
    pub widget_name: String,
    pub rows: u32,
    pub columns: u32,
    #[serde(default = "default_version")]
    pub version: u32,
    /// Kind-specific base props
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

fn default_version() -> u32 {
    1
}

impl WidgetConfig {
    pub fn new(widget_type: WidgetKind, widget_name: impl Into<String>, rows: u32, columns: u32) -> Self {
        Self {
            widget_type,
            widget_name: widget_name.into(),
            rows,
            columns,
            version: default_version(),
            props: Map::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }
}

/// Flattened metadata summary for one kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetTypeConfig {
    pub validations: ValidationMap,
    pub default_properties: DefaultPropertiesMap,
    pub derived_properties: DerivedPropertiesMap,
    pub meta_properties: MetaPropertiesMap,
}

/// Kind -> metadata summary for the whole catalog
pub type WidgetTypeConfigMap = BTreeMap<WidgetKind, WidgetTypeConfig>;
