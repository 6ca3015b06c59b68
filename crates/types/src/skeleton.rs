//! Serialized widget tree nodes and the props handed to builders

use crate::kind::WidgetKind;
use crate::render_mode::RenderMode;
use serde::{Deserialize, Serialize};

/// Serialized, pre-instantiation description of one widget tree node
///
/// The type tag is kept raw: persisted layouts may carry tags that are
/// stale or were never valid kinds, and those must only make their own
/// node absent rather than fail the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSkeleton {
    pub widget_id: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    #[serde(default)]
    pub children: Vec<WidgetSkeleton>,
}

impl WidgetSkeleton {
    pub fn new(widget_id: impl Into<String>, widget_type: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            widget_type: widget_type.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<WidgetSkeleton>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(WidgetSkeleton::node_count).sum::<usize>()
    }
}

/// Props bundle assembled for a builder from a skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetProps {
    /// Rendering key, always equal to `widget_id`
    pub key: String,
    pub widget_id: String,
    #[serde(rename = "type")]
    pub widget_type: WidgetKind,
    pub is_visible: bool,
    pub render_mode: RenderMode,
    /// Children exactly as supplied by the skeleton
    pub children: Vec<WidgetSkeleton>,
}

impl WidgetProps {
    /// Props for `skeleton`, whose tag has been resolved to `widget_type`
    pub fn from_skeleton(
        skeleton: &WidgetSkeleton,
        widget_type: &WidgetKind,
        render_mode: RenderMode,
    ) -> Self {
        Self {
            key: skeleton.widget_id.clone(),
            widget_id: skeleton.widget_id.clone(),
            widget_type: widget_type.clone(),
            is_visible: true,
            render_mode,
            children: skeleton.children.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_from_layout_json() {
        let json = r#"{
            "widgetId": "root",
            "type": "CONTAINER_WIDGET",
            "children": [
                { "widgetId": "t1", "type": "TEXT_WIDGET" },
                { "widgetId": "b1", "type": "BUTTON_WIDGET", "children": [] }
            ]
        }"#;
        let skeleton: WidgetSkeleton = serde_json::from_str(json).unwrap();

        assert_eq!(skeleton.widget_type.as_str(), "CONTAINER_WIDGET");
        assert_eq!(skeleton.children.len(), 2);
        assert!(skeleton.children[0].children.is_empty());
        assert_eq!(skeleton.node_count(), 3);
    }

    #[test]
    fn test_skeleton_keeps_unvalidated_tags() {
        let json = r#"{
            "widgetId": "root",
            "type": "CONTAINER_WIDGET",
            "children": [
                { "widgetId": "t1", "type": "TEXT_WIDGET" },
                { "widgetId": "old", "type": "Legacy Widget" },
                { "widgetId": "blank", "type": "" }
            ]
        }"#;
        let skeleton: WidgetSkeleton = serde_json::from_str(json).unwrap();

        assert_eq!(skeleton.children[1].widget_type, "Legacy Widget");
        assert!(WidgetKind::new(skeleton.children[1].widget_type.clone()).is_err());
        assert_eq!(skeleton.children[2].widget_type, "");
    }

    #[test]
    fn test_props_from_skeleton() {
        let kind = WidgetKind::from_static("TEXT_WIDGET");
        let skeleton = WidgetSkeleton::new("w1", kind.clone());
        let props = WidgetProps::from_skeleton(&skeleton, &kind, RenderMode::Page);

        assert_eq!(props.key, "w1");
        assert_eq!(props.widget_id, "w1");
        assert!(props.is_visible);
        assert_eq!(props.render_mode, RenderMode::Page);

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["type"], "TEXT_WIDGET");
        assert_eq!(json["isVisible"], true);
        assert_eq!(json["renderMode"], "PAGE");
    }
}
