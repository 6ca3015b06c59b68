//! widgetry: Widget type registry and dispatch for a visual application builder
//!
//! This library ties the registry crates together for applications:
//! - Configuration management
//! - Registry bootstrap from the built-in widget modules
//! - Render passes over serialized widget trees
//! - Layout file loading

pub mod bootstrap;
pub mod config;
pub mod layout;
pub mod render;

// Re-export commonly used types
pub use bootstrap::build_registry;
pub use config::AppConfig;
pub use render::{render_tree, RenderedNode};
pub use widgetry_core::{RenderMode, WidgetKind, WidgetRegistry, WidgetSkeleton};
