//! Button widget

use crate::basic::BasicWidget;
use crate::BUTTON_WIDGET;
use anyhow::Result;
use serde_json::json;
use widgetry_core::validation::with_base_validation;
use widgetry_core::{
    BoxedWidget, MetaPropertiesMap, PropertyPaneConfig, ValidationType, WidgetBuilder,
    WidgetConfig, WidgetKind, WidgetProps, WidgetRegistration,
};

pub struct ButtonWidgetBuilder;

impl WidgetBuilder for ButtonWidgetBuilder {
    fn build_widget(&self, props: WidgetProps) -> Result<BoxedWidget> {
        Ok(Box::new(BasicWidget::new(props)))
    }
}

pub(crate) fn registration() -> WidgetRegistration {
    WidgetRegistration::new(WidgetKind::from_static(BUTTON_WIDGET), ButtonWidgetBuilder)
        .with_validations(with_base_validation([
            ("text", ValidationType::Text),
            ("buttonStyle", ValidationType::Text),
            ("onClick", ValidationType::ActionSelector),
        ]))
        .with_meta_properties(MetaPropertiesMap::from([(
            "recaptchaToken".to_string(),
            json!(null),
        )]))
        .with_pane_config(vec![
            PropertyPaneConfig::section(
                "General",
                vec![
                    PropertyPaneConfig::control("Label", "text", "INPUT_TEXT"),
                    PropertyPaneConfig::control("Button Style", "buttonStyle", "DROP_DOWN")
                        .with_extra(
                            "options",
                            json!(["PRIMARY_BUTTON", "SECONDARY_BUTTON", "DANGER_BUTTON"]),
                        ),
                    PropertyPaneConfig::control("Disabled", "isDisabled", "SWITCH"),
                    PropertyPaneConfig::control("Visible", "isVisible", "SWITCH"),
                ],
            ),
            PropertyPaneConfig::section(
                "Actions",
                vec![PropertyPaneConfig::control("onClick", "onClick", "ACTION_SELECTOR")
                    .with_extra("isTriggerProperty", json!(true))],
            ),
        ])
}

pub(crate) fn default_config() -> WidgetConfig {
    WidgetConfig::new(WidgetKind::from_static(BUTTON_WIDGET), "Button", 1, 2)
        .with_prop("text", json!("Submit"))
        .with_prop("buttonStyle", json!("PRIMARY_BUTTON"))
        .with_prop("isDisabled", json!(false))
}
