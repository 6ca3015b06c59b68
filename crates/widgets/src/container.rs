//! Container widget
//!
//! Holds other widgets. The skeleton children arrive untouched in the
//! props; the container only records their ids; instantiating them is up
//! to the rendering layer.

use crate::CONTAINER_WIDGET;
use anyhow::Result;
use serde_json::json;
use widgetry_core::validation::with_base_validation;
use widgetry_core::{
    BoxedWidget, PropertyPaneConfig, ValidationType, Widget, WidgetBuilder, WidgetConfig,
    WidgetKind, WidgetProps, WidgetRegistration,
};

#[derive(Debug, Clone)]
pub struct ContainerWidget {
    props: WidgetProps,
    child_ids: Vec<String>,
}

impl ContainerWidget {
    pub fn child_ids(&self) -> &[String] {
        &self.child_ids
    }
}

impl Widget for ContainerWidget {
    fn props(&self) -> &WidgetProps {
        &self.props
    }

    fn describe(&self) -> String {
        format!(
            "{} ({}, {} children)",
            self.widget_id(),
            self.widget_type(),
            self.child_ids.len()
        )
    }
}

pub struct ContainerWidgetBuilder;

impl WidgetBuilder for ContainerWidgetBuilder {
    fn build_widget(&self, props: WidgetProps) -> Result<BoxedWidget> {
        let child_ids = props.children.iter().map(|c| c.widget_id.clone()).collect();
        Ok(Box::new(ContainerWidget { props, child_ids }))
    }
}

pub(crate) fn registration() -> WidgetRegistration {
    WidgetRegistration::new(WidgetKind::from_static(CONTAINER_WIDGET), ContainerWidgetBuilder)
        .with_validations(with_base_validation([
            ("backgroundColor", ValidationType::Text),
            ("shouldScrollContents", ValidationType::Boolean),
        ]))
        .with_pane_config(vec![PropertyPaneConfig::section(
            "General",
            vec![
                PropertyPaneConfig::control("Background Color", "backgroundColor", "COLOR_PICKER"),
                PropertyPaneConfig::control("Scroll Contents", "shouldScrollContents", "SWITCH"),
                PropertyPaneConfig::control("Visible", "isVisible", "SWITCH"),
            ],
        )])
}

pub(crate) fn default_config() -> WidgetConfig {
    WidgetConfig::new(WidgetKind::from_static(CONTAINER_WIDGET), "Container", 10, 8)
        .with_prop("backgroundColor", json!("#FFFFFF"))
        .with_prop("containerStyle", json!("card"))
}
