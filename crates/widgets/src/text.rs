//! Text widget

use crate::basic::BasicWidget;
use crate::TEXT_WIDGET;
use anyhow::Result;
use serde_json::json;
use widgetry_core::validation::with_base_validation;
use widgetry_core::{
    BoxedWidget, DefaultPropertiesMap, MetaPropertiesMap, PropertyPaneConfig, ValidationType,
    WidgetBuilder, WidgetConfig, WidgetKind, WidgetProps, WidgetRegistration,
};

pub struct TextWidgetBuilder;

impl WidgetBuilder for TextWidgetBuilder {
    fn build_widget(&self, props: WidgetProps) -> Result<BoxedWidget> {
        Ok(Box::new(BasicWidget::new(props)))
    }
}

pub(crate) fn registration() -> WidgetRegistration {
    WidgetRegistration::new(WidgetKind::from_static(TEXT_WIDGET), TextWidgetBuilder)
        .with_validations(with_base_validation([
            ("text", ValidationType::Text),
            ("textStyle", ValidationType::Text),
            ("shouldScroll", ValidationType::Boolean),
        ]))
        .with_default_properties(DefaultPropertiesMap::from([(
            "text".to_string(),
            String::new(),
        )]))
        .with_meta_properties(MetaPropertiesMap::from([(
            "isFocused".to_string(),
            json!(false),
        )]))
        .with_pane_config(pane_config())
}

fn pane_config() -> Vec<PropertyPaneConfig> {
    vec![
        PropertyPaneConfig::section(
            "General",
            vec![
                PropertyPaneConfig::control("Text", "text", "INPUT_TEXT")
                    .with_help_text("Sets the text of the widget")
                    .with_extra("isBindProperty", json!(true)),
                PropertyPaneConfig::control("Scroll Contents", "shouldScroll", "SWITCH"),
                PropertyPaneConfig::control("Visible", "isVisible", "SWITCH")
                    .with_help_text("Controls the visibility of the widget"),
            ],
        ),
        PropertyPaneConfig::section(
            "Styles",
            vec![
                PropertyPaneConfig::control("Text Color", "textColor", "COLOR_PICKER"),
                PropertyPaneConfig::control("Text Size", "fontSize", "DROP_DOWN").with_extra(
                    "options",
                    json!(["HEADING1", "HEADING2", "PARAGRAPH"]),
                ),
            ],
        ),
    ]
}

pub(crate) fn default_config() -> WidgetConfig {
    WidgetConfig::new(WidgetKind::from_static(TEXT_WIDGET), "Text", 1, 4)
        .with_prop("text", json!("Label"))
        .with_prop("fontSize", json!("PARAGRAPH"))
        .with_prop("shouldScroll", json!(false))
}
