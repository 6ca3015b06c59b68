//! Reading skeleton trees from layout files

use anyhow::{Context, Result};
use std::path::Path;
use widgetry_core::WidgetSkeleton;

/// Load a skeleton tree from a JSON layout file.
///
/// The file holds either a single root node or a page object with a
/// `dsl` field containing the root node.
pub fn load_skeleton(path: &Path) -> Result<WidgetSkeleton> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;
    parse_skeleton(&content).with_context(|| format!("Invalid layout in {}", path.display()))
}

/// Parse a skeleton tree from JSON text
pub fn parse_skeleton(content: &str) -> Result<WidgetSkeleton> {
    let mut value: serde_json::Value = serde_json::from_str(content)?;
    if let Some(dsl) = value.get_mut("dsl") {
        value = dsl.take();
    }
    Ok(serde_json::from_value(value)?)
}
