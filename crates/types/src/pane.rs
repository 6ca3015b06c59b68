//! Property pane configuration tree
//!
//! A pane config is a recursive tree of sections and controls. A control
//! may open an editable sub-form (one series of a chart, one column of a
//! table), described by a nested [`PanelConfig`] with its own children.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One section or control of a property pane
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneConfig {
    /// Stable identity, assigned by the annotator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Section heading (sections only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
    /// Control label (controls only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Widget property edited by this control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    /// Form control used to edit the property (e.g. "INPUT_TEXT", "SWITCH")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PropertyPaneConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_config: Option<PanelConfig>,
    /// Control-specific settings the registry does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PropertyPaneConfig {
    /// Create a section node
    pub fn section(name: impl Into<String>, children: Vec<PropertyPaneConfig>) -> Self {
        Self {
            section_name: Some(name.into()),
            children: Some(children),
            ..Default::default()
        }
    }

    /// Create a control node
    pub fn control(
        label: impl Into<String>,
        property_name: impl Into<String>,
        control_type: impl Into<String>,
    ) -> Self {
        Self {
            label: Some(label.into()),
            property_name: Some(property_name.into()),
            control_type: Some(control_type.into()),
            ..Default::default()
        }
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.panel_config = Some(panel);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Human label: section name, control label, or property name
    pub fn display_label(&self) -> &str {
        self.section_name
            .as_deref()
            .or(self.label.as_deref())
            .or(self.property_name.as_deref())
            .unwrap_or("")
    }

    /// Number of nodes in this subtree, including nested panel nodes
    pub fn node_count(&self) -> usize {
        let children = self
            .children
            .as_deref()
            .map(|c| c.iter().map(PropertyPaneConfig::node_count).sum())
            .unwrap_or(0);
        let panel = self
            .panel_config
            .as_ref()
            .map(|p| p.nodes().map(PropertyPaneConfig::node_count).sum())
            .unwrap_or(0);
        1 + children + panel
    }
}

/// Nested sub-form opened by a control
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    #[serde(default)]
    pub editable_title: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_id_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<PanelChildren>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PanelConfig {
    pub fn new(children: Vec<PropertyPaneConfig>) -> Self {
        Self {
            children: Some(PanelChildren::Nodes(
                children.into_iter().map(PanelChild::Node).collect(),
            )),
            ..Default::default()
        }
    }

    pub fn with_title_property(mut self, property: impl Into<String>) -> Self {
        self.editable_title = true;
        self.title_property_name = Some(property.into());
        self
    }

    pub fn with_panel_id_property(mut self, property: impl Into<String>) -> Self {
        self.panel_id_property_name = Some(property.into());
        self
    }

    /// Well-shaped child nodes, skipping malformed entries
    pub fn nodes(&self) -> impl Iterator<Item = &PropertyPaneConfig> + '_ {
        let children = match &self.children {
            Some(PanelChildren::Nodes(children)) => children.as_slice(),
            _ => &[],
        };
        children.iter().filter_map(PanelChild::node)
    }
}

/// Children of a nested panel.
///
/// Panel configs arrive from widget modules as loosely-shaped data; a
/// children field that is not an array is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanelChildren {
    Nodes(Vec<PanelChild>),
    Malformed(Value),
}

/// One entry of a panel's children array. An entry that does not
/// parse as a node is kept verbatim and does not affect its siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanelChild {
    Node(PropertyPaneConfig),
    Malformed(Value),
}

impl PanelChild {
    pub fn node(&self) -> Option<&PropertyPaneConfig> {
        match self {
            PanelChild::Node(node) => Some(node),
            PanelChild::Malformed(_) => None,
        }
    }
}
