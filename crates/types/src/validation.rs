//! Property validation schema
//!
//! The registry stores these schemas per kind; evaluating them is the job
//! of the property evaluation engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation rule applied to one widget property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationType {
    Text,
    Regex,
    Number,
    Boolean,
    Object,
    Array,
    TableData,
    OptionsData,
    ChartData,
    ChartSeriesData,
    ColumnPropertiesArray,
    DateIsoString,
    ActionSelector,
    WidgetId,
}

/// Property name -> validation rule
pub type ValidationMap = BTreeMap<String, ValidationType>;
