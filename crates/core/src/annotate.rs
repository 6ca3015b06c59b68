//! Property pane annotation
//!
//! Stamps every node of a pane config tree (children and nested panel
//! children, pre-order) with a fresh key from [`generate_key`]. The input
//! is consumed and a new tree returned; nothing is mutated after the
//! registry stores it.

use crate::error::RegistryError;
use crate::id_gen::generate_key;
use log::warn;
use widgetry_types::{PanelChild, PanelChildren, PropertyPaneConfig};

/// Annotate a sequence of pane config nodes
pub fn annotate_pane_config(config: Vec<PropertyPaneConfig>) -> Vec<PropertyPaneConfig> {
    config.into_iter().map(annotate_node).collect()
}

fn annotate_node(mut node: PropertyPaneConfig) -> PropertyPaneConfig {
    node.id = Some(generate_key());

    if let Some(children) = node.children.take() {
        node.children = Some(annotate_pane_config(children));
    }

    if let Some(mut panel) = node.panel_config.take() {
        match panel.children.take() {
            Some(PanelChildren::Nodes(children)) => {
                let children = children
                    .into_iter()
                    .map(|child| annotate_panel_child(child, &node))
                    .collect();
                panel.children = Some(PanelChildren::Nodes(children));
            }
            Some(malformed @ PanelChildren::Malformed(_)) => {
                warn_malformed(&node);
                panel.children = Some(malformed);
            }
            None => {}
        }
        node.panel_config = Some(panel);
    }

    node
}

fn annotate_panel_child(child: PanelChild, owner: &PropertyPaneConfig) -> PanelChild {
    match child {
        PanelChild::Node(node) => PanelChild::Node(annotate_node(node)),
        malformed @ PanelChild::Malformed(_) => {
            warn_malformed(owner);
            malformed
        }
    }
}

fn warn_malformed(owner: &PropertyPaneConfig) {
    let err = RegistryError::MalformedPaneConfig {
        label: owner.display_label().to_string(),
    };
    warn!("{}", err);
}

/// Ids of an annotated tree in pre-order, including nested panel nodes
pub fn collect_ids(config: &[PropertyPaneConfig]) -> Vec<&str> {
    let mut ids = Vec::new();
    collect_into(config, &mut ids);
    ids
}

fn collect_into<'a>(
    config: impl IntoIterator<Item = &'a PropertyPaneConfig>,
    ids: &mut Vec<&'a str>,
) {
    for node in config {
        if let Some(id) = node.id.as_deref() {
            ids.push(id);
        }
        if let Some(children) = node.children.as_deref() {
            collect_into(children, ids);
        }
        if let Some(panel) = node.panel_config.as_ref() {
            collect_into(panel.nodes(), ids);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use widgetry_types::PanelConfig;

    fn chart_like_config() -> Vec<PropertyPaneConfig> {
        vec![
            PropertyPaneConfig::section(
                "General",
                vec![
                    PropertyPaneConfig::control("Title", "chartName", "INPUT_TEXT"),
                    PropertyPaneConfig::control("Series", "chartData", "CHART_DATA").with_panel(
                        PanelConfig::new(vec![
                            PropertyPaneConfig::control("Name", "seriesName", "INPUT_TEXT"),
                            PropertyPaneConfig::section(
                                "Data",
                                vec![PropertyPaneConfig::control("Data", "data", "INPUT_TEXT")],
                            ),
                        ])
                        .with_title_property("seriesName"),
                    ),
                ],
            ),
            PropertyPaneConfig::section("Actions", vec![]),
        ]
    }

    #[test]
    fn test_every_node_gets_unique_id() {
        let config = chart_like_config();
        let total: usize = config.iter().map(PropertyPaneConfig::node_count).sum();

        let annotated = annotate_pane_config(config);
        let ids = collect_ids(&annotated);

        assert_eq!(ids.len(), total);
        assert!(ids.iter().all(|id| !id.is_empty()));
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_shape_is_preserved() {
        let config = chart_like_config();
        let annotated = annotate_pane_config(config.clone());

        let strip = |nodes: &[PropertyPaneConfig]| -> serde_json::Value {
            let mut value = serde_json::to_value(nodes).unwrap();
            strip_ids(&mut value);
            value
        };
        assert_eq!(strip(&annotated), strip(&config));

        let labels: Vec<_> = annotated.iter().map(|n| n.display_label()).collect();
        assert_eq!(labels, vec!["General", "Actions"]);
    }

    fn strip_ids(value: &mut serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                map.remove("id");
                map.values_mut().for_each(strip_ids);
            }
            serde_json::Value::Array(items) => items.iter_mut().for_each(strip_ids),
            _ => {}
        }
    }

    #[test]
    fn test_ids_assigned_in_document_order() {
        let annotated = annotate_pane_config(chart_like_config());
        let ids = collect_ids(&annotated);
        let counters: Vec<u64> = ids
            .iter()
            .map(|id| u64::from_str_radix(id.rsplit('-').next().unwrap(), 16).unwrap())
            .collect();
        assert!(counters.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_children_stay_leaf() {
        let annotated = annotate_pane_config(vec![PropertyPaneConfig::section("Empty", vec![])]);
        assert!(annotated[0].id.is_some());
        assert_eq!(annotated[0].children.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_malformed_panel_passes_through() {
        let node: PropertyPaneConfig = serde_json::from_value(json!({
            "label": "Columns",
            "propertyName": "primaryColumns",
            "panelConfig": { "children": "oops" }
        }))
        .unwrap();

        let annotated = annotate_pane_config(vec![node]);

        assert!(annotated[0].id.is_some());
        let panel = annotated[0].panel_config.as_ref().unwrap();
        assert_eq!(panel.children, Some(PanelChildren::Malformed(json!("oops"))));
        assert_eq!(collect_ids(&annotated).len(), 1);
    }

    #[test]
    fn test_bad_panel_entry_is_skipped() {
        let node: PropertyPaneConfig = serde_json::from_value(json!({
            "label": "Columns",
            "propertyName": "primaryColumns",
            "panelConfig": {
                "children": [
                    { "label": "Column type", "propertyName": "columnType" },
                    { "helpText": [] }
                ]
            }
        }))
        .unwrap();

        let annotated = annotate_pane_config(vec![node]);

        let panel = annotated[0].panel_config.as_ref().unwrap();
        let children = match &panel.children {
            Some(PanelChildren::Nodes(children)) => children,
            other => panic!("expected an array of children, got {:?}", other),
        };
        assert!(children[0].node().and_then(|n| n.id.as_ref()).is_some());
        assert_eq!(children[1], PanelChild::Malformed(json!({ "helpText": [] })));
        assert_eq!(collect_ids(&annotated).len(), 2);
    }

    #[test]
    fn test_reannotation_assigns_fresh_ids() {
        let first = annotate_pane_config(chart_like_config());
        let first_ids: Vec<String> = collect_ids(&first).into_iter().map(String::from).collect();
        let second = annotate_pane_config(first);
        let second_ids = collect_ids(&second);

        assert_eq!(first_ids.len(), second_ids.len());
        assert!(first_ids.iter().zip(&second_ids).all(|(a, b)| a != b));
    }
}
