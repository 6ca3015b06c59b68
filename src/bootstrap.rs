//! Registry bootstrap
//!
//! Builds the registry once at startup: registers every enabled built-in
//! widget module, then seals it for shared read-only use.

use crate::config::AppConfig;
use log::info;
use std::sync::Arc;
use widgetry_core::WidgetRegistry;

/// Build the widget registry described by `config`
pub fn build_registry(config: &AppConfig) -> Arc<WidgetRegistry> {
    let mut registry = WidgetRegistry::new();
    widgetry_widgets::register_all(&mut registry, &config.disabled_widgets);

    if config.seal_after_bootstrap {
        registry.seal();
    }
    info!(
        "Widget registry ready: {} kinds (sealed: {})",
        registry.widget_types().len(),
        registry.is_sealed()
    );
    Arc::new(registry)
}
