//! widgetry-widgets: Built-in widget kinds.
//!
//! Each module supplies one widget family: its builder, metadata bundle,
//! property pane config and the default config used when the widget is
//! first dropped on a page.

mod basic;
mod button;
mod chart;
mod container;
mod input;
mod table;
mod text;

use log::{info, warn};
use widgetry_core::{WidgetConfig, WidgetRegistration, WidgetRegistry};

pub use basic::BasicWidget;
pub use button::ButtonWidgetBuilder;
pub use chart::ChartWidgetBuilder;
pub use container::{ContainerWidget, ContainerWidgetBuilder};
pub use input::InputWidgetBuilder;
pub use table::TableWidgetBuilder;
pub use text::TextWidgetBuilder;

pub const TEXT_WIDGET: &str = "TEXT_WIDGET";
pub const BUTTON_WIDGET: &str = "BUTTON_WIDGET";
pub const INPUT_WIDGET: &str = "INPUT_WIDGET";
pub const CONTAINER_WIDGET: &str = "CONTAINER_WIDGET";
pub const CHART_WIDGET: &str = "CHART_WIDGET";
pub const TABLE_WIDGET: &str = "TABLE_WIDGET";

/// A built-in widget module
pub struct BuiltinWidget {
    pub kind: &'static str,
    pub registration: fn() -> WidgetRegistration,
    pub default_config: fn() -> WidgetConfig,
}

/// All built-in widget modules, in registration order
pub fn builtin_widgets() -> [BuiltinWidget; 6] {
    [
        BuiltinWidget {
            kind: CONTAINER_WIDGET,
            registration: container::registration,
            default_config: container::default_config,
        },
        BuiltinWidget {
            kind: TEXT_WIDGET,
            registration: text::registration,
            default_config: text::default_config,
        },
        BuiltinWidget {
            kind: BUTTON_WIDGET,
            registration: button::registration,
            default_config: button::default_config,
        },
        BuiltinWidget {
            kind: INPUT_WIDGET,
            registration: input::registration,
            default_config: input::default_config,
        },
        BuiltinWidget {
            kind: CHART_WIDGET,
            registration: chart::registration,
            default_config: chart::default_config,
        },
        BuiltinWidget {
            kind: TABLE_WIDGET,
            registration: table::registration,
            default_config: table::default_config,
        },
    ]
}

/// Register all built-in widgets, skipping the kinds listed in `disabled`
pub fn register_all(registry: &mut WidgetRegistry, disabled: &[String]) {
    let mut registered = 0;
    for widget in builtin_widgets() {
        if disabled.iter().any(|d| d == widget.kind) {
            info!("Skipping disabled widget {}", widget.kind);
            continue;
        }
        let registration = (widget.registration)();
        let kind = registration.kind().clone();
        if registry.register(registration).is_err() {
            continue;
        }
        if let Err(e) = registry.store_widget_config(kind, (widget.default_config)()) {
            warn!("Failed to store default config for {}: {}", widget.kind, e);
        }
        registered += 1;
    }
    info!("Registered {} built-in widgets", registered);
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetry_core::{collect_ids, RenderMode, WidgetKind, WidgetSkeleton};

    #[test]
    fn test_register_all() {
        let mut registry = WidgetRegistry::new();
        register_all(&mut registry, &[]);

        let tags: Vec<_> = registry.widget_types().iter().map(WidgetKind::as_str).collect();
        assert_eq!(
            tags,
            vec![
                CONTAINER_WIDGET,
                TEXT_WIDGET,
                BUTTON_WIDGET,
                INPUT_WIDGET,
                CHART_WIDGET,
                TABLE_WIDGET
            ]
        );
        assert_eq!(registry.widget_configs().count(), 6);
    }

    #[test]
    fn test_register_all_twice_keeps_catalog() {
        let mut registry = WidgetRegistry::new();
        register_all(&mut registry, &[]);
        register_all(&mut registry, &[]);

        assert_eq!(registry.widget_types().len(), 6);
    }

    #[test]
    fn test_disabled_widgets_are_skipped() {
        let mut registry = WidgetRegistry::new();
        register_all(&mut registry, &[CHART_WIDGET.to_string()]);

        assert!(!registry.is_registered(CHART_WIDGET));
        assert!(registry.is_registered(TABLE_WIDGET));
        assert!(registry
            .widget_config(&WidgetKind::from_static(CHART_WIDGET))
            .is_none());
    }

    #[test]
    fn test_every_builtin_builds_and_has_pane_ids() {
        let mut registry = WidgetRegistry::new();
        register_all(&mut registry, &[]);

        for kind in registry.widget_types() {
            let skeleton = WidgetSkeleton::new(format!("{}_1", kind), kind.clone());
            let widget = registry
                .create_widget(&skeleton, RenderMode::Canvas)
                .expect("built-in widget builds");
            assert_eq!(widget.widget_type(), kind);

            let pane = registry.pane_config(kind);
            assert!(!pane.is_empty(), "{} has no pane config", kind);
            let node_count: usize = pane.iter().map(|n| n.node_count()).sum();
            assert_eq!(collect_ids(pane).len(), node_count);
        }
    }

    #[test]
    fn test_default_configs_match_kind() {
        for widget in builtin_widgets() {
            let config = (widget.default_config)();
            assert_eq!(config.widget_type.as_str(), widget.kind);
            assert!(config.rows > 0 && config.columns > 0);
        }
    }
}
