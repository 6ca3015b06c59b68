//! Widget instantiation from skeleton nodes

use crate::builder::BoxedWidget;
use crate::error::RegistryError;
use crate::registry::WidgetRegistry;
use log::error;
use widgetry_types::{RenderMode, WidgetProps, WidgetSkeleton};

impl WidgetRegistry {
    /// Build a live widget for one skeleton node.
    ///
    /// Returns `None` (and logs) when the kind has no builder or the
    /// builder fails, so one bad node does not abort the render pass.
    /// Children are handed to the builder as-is and not resolved here.
    pub fn create_widget(
        &self,
        skeleton: &WidgetSkeleton,
        render_mode: RenderMode,
    ) -> Option<BoxedWidget> {
        match self.try_create_widget(skeleton, render_mode) {
            Ok(widget) => Some(widget),
            Err(err) => {
                error!("{}", err);
                None
            }
        }
    }

    /// Build a live widget, returning the failure instead of logging it
    pub fn try_create_widget(
        &self,
        skeleton: &WidgetSkeleton,
        render_mode: RenderMode,
    ) -> Result<BoxedWidget, RegistryError> {
        let (kind, builder) = self
            .widget_type(&skeleton.widget_type)
            .and_then(|kind| self.builder(kind).map(|builder| (kind, builder)))
            .ok_or_else(|| RegistryError::BuilderNotRegistered(skeleton.widget_type.clone()))?;

        let props = WidgetProps::from_skeleton(skeleton, kind, render_mode);
        builder
            .build_widget(props)
            .map_err(|source| RegistryError::BuildFailed {
                kind: kind.clone(),
                widget_id: skeleton.widget_id.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RegistryError;
    use crate::registry::{WidgetRegistration, WidgetRegistry};
    use crate::testing::{failing_builder, text_registration};
    use widgetry_types::{RenderMode, WidgetKind, WidgetSkeleton};

    fn text_registry() -> WidgetRegistry {
        let mut registry = WidgetRegistry::new();
        registry.register(text_registration()).unwrap();
        registry
    }

    #[test]
    fn test_create_registered_widget() {
        let registry = text_registry();
        let skeleton = WidgetSkeleton::new("w1", WidgetKind::from_static("TEXT_WIDGET"));
        let mode: RenderMode = "EDIT".parse().unwrap();

        let widget = registry.create_widget(&skeleton, mode).unwrap();

        assert_eq!(widget.widget_type().as_str(), "TEXT_WIDGET");
        assert_eq!(widget.widget_id(), "w1");
        assert_eq!(widget.props().key, "w1");
        assert!(widget.is_visible());
        assert_eq!(widget.render_mode(), RenderMode::Canvas);
    }

    #[test]
    fn test_unknown_kind_yields_none() {
        let registry = text_registry();
        let skeleton = WidgetSkeleton::new("w2", WidgetKind::from_static("UNKNOWN"));

        assert!(registry.create_widget(&skeleton, RenderMode::Page).is_none());
        assert!(matches!(
            registry.try_create_widget(&skeleton, RenderMode::Page),
            Err(RegistryError::BuilderNotRegistered(tag)) if tag == "UNKNOWN"
        ));
    }

    #[test]
    fn test_invalid_tag_yields_none() {
        let registry = text_registry();
        let skeleton = WidgetSkeleton::new("w3", "Legacy Widget");

        assert!(registry.create_widget(&skeleton, RenderMode::Page).is_none());
        assert!(matches!(
            registry.try_create_widget(&skeleton, RenderMode::Page),
            Err(RegistryError::BuilderNotRegistered(tag)) if tag == "Legacy Widget"
        ));
    }

    #[test]
    fn test_failing_builder_yields_none() {
        let mut registry = WidgetRegistry::new();
        let kind = WidgetKind::from_static("BROKEN_WIDGET");
        registry
            .register(WidgetRegistration::new(kind.clone(), failing_builder()))
            .unwrap();
        let skeleton = WidgetSkeleton::new("b1", kind);

        assert!(registry.create_widget(&skeleton, RenderMode::Canvas).is_none());
        match registry.try_create_widget(&skeleton, RenderMode::Canvas) {
            Err(RegistryError::BuildFailed { widget_id, .. }) => assert_eq!(widget_id, "b1"),
            other => panic!("expected BuildFailed, got {:?}", other.map(|w| w.describe())),
        }
    }

    #[test]
    fn test_children_are_passed_through() {
        let registry = text_registry();
        let text = WidgetKind::from_static("TEXT_WIDGET");
        let skeleton = WidgetSkeleton::new("parent", text.clone()).with_children(vec![
            WidgetSkeleton::new("c1", text.clone()),
            WidgetSkeleton::new("c2", WidgetKind::from_static("UNKNOWN")),
        ]);

        let widget = registry.create_widget(&skeleton, RenderMode::Page).unwrap();

        assert_eq!(widget.props().children, skeleton.children);
    }

    #[test]
    fn test_shared_registry_reads_across_threads() {
        let registry = text_registry().into_shared();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let skeleton = WidgetSkeleton::new(
                        format!("w{}", i),
                        WidgetKind::from_static("TEXT_WIDGET"),
                    );
                    registry
                        .create_widget(&skeleton, RenderMode::Page)
                        .map(|w| w.widget_id().to_string())
                })
            })
            .collect();

        let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(
            ids,
            vec![
                Some("w0".to_string()),
                Some("w1".to_string()),
                Some("w2".to_string()),
                Some("w3".to_string()),
            ]
        );
        assert!(registry.is_sealed());
    }
}
