//! Render pass over a skeleton tree
//!
//! Walks the tree pre-order, instantiating each node through the
//! registry. A node whose kind cannot be built is reported as not
//! rendered; its siblings and children are still visited.

use serde::Serialize;
use widgetry_core::{RenderMode, WidgetRegistry, WidgetSkeleton};

/// Outcome of rendering one node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedNode {
    pub widget_id: String,
    /// Tag as it appeared in the layout
    #[serde(rename = "type")]
    pub widget_type: String,
    pub rendered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    /// Count of (rendered, total) nodes in this subtree
    pub fn counts(&self) -> (usize, usize) {
        self.children.iter().fold(
            (usize::from(self.rendered), 1),
            |(rendered, total), child| {
                let (r, t) = child.counts();
                (rendered + r, total + t)
            },
        )
    }
}

/// Instantiate every node of `skeleton`
pub fn render_tree(
    registry: &WidgetRegistry,
    skeleton: &WidgetSkeleton,
    render_mode: RenderMode,
) -> RenderedNode {
    let widget = registry.create_widget(skeleton, render_mode);
    RenderedNode {
        widget_id: skeleton.widget_id.clone(),
        widget_type: skeleton.widget_type.clone(),
        rendered: widget.is_some(),
        description: widget.map(|w| w.describe()),
        children: skeleton
            .children
            .iter()
            .map(|child| render_tree(registry, child, render_mode))
            .collect(),
    }
}
