//! Widget and builder traits

use anyhow::Result;
use widgetry_types::{RenderMode, WidgetKind, WidgetProps};

/// Trait for all live widget instances
///
/// Instances are owned by the rendering layer once built; the registry
/// never keeps a reference to them.
pub trait Widget: Send {
    /// Props the instance was built from
    fn props(&self) -> &WidgetProps;

    fn widget_id(&self) -> &str {
        &self.props().widget_id
    }

    fn widget_type(&self) -> &WidgetKind {
        &self.props().widget_type
    }

    fn render_mode(&self) -> RenderMode {
        self.props().render_mode
    }

    fn is_visible(&self) -> bool {
        self.props().is_visible
    }

    /// One-line summary used by diagnostics and the CLI
    fn describe(&self) -> String {
        format!("{} ({})", self.widget_id(), self.widget_type())
    }
}

/// Type-erased widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;

/// Builds instances of one widget kind
pub trait WidgetBuilder: Send + Sync {
    fn build_widget(&self, props: WidgetProps) -> Result<BoxedWidget>;
}

impl<F> WidgetBuilder for F
where
    F: Fn(WidgetProps) -> Result<BoxedWidget> + Send + Sync,
{
    fn build_widget(&self, props: WidgetProps) -> Result<BoxedWidget> {
        self(props)
    }
}
