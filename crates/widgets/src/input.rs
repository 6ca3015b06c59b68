//! Input widget

use crate::basic::BasicWidget;
use crate::INPUT_WIDGET;
use anyhow::Result;
use serde_json::json;
use widgetry_core::validation::with_base_validation;
use widgetry_core::{
    BoxedWidget, DefaultPropertiesMap, DerivedPropertiesMap, MetaPropertiesMap,
    PropertyPaneConfig, ValidationType, WidgetBuilder, WidgetConfig, WidgetKind, WidgetProps,
    WidgetRegistration,
};

pub struct InputWidgetBuilder;

impl WidgetBuilder for InputWidgetBuilder {
    fn build_widget(&self, props: WidgetProps) -> Result<BoxedWidget> {
        Ok(Box::new(BasicWidget::new(props)))
    }
}

pub(crate) fn registration() -> WidgetRegistration {
    WidgetRegistration::new(WidgetKind::from_static(INPUT_WIDGET), InputWidgetBuilder)
        .with_validations(with_base_validation([
            ("inputType", ValidationType::Text),
            ("defaultText", ValidationType::Text),
            ("placeholderText", ValidationType::Text),
            ("regex", ValidationType::Regex),
            ("isRequired", ValidationType::Boolean),
            ("maxChars", ValidationType::Number),
        ]))
        .with_derived_properties(DerivedPropertiesMap::from([(
            "isValid".to_string(),
            "{{ this.isRequired ? !!this.text?.length : true }}".to_string(),
        )]))
        .with_default_properties(DefaultPropertiesMap::from([(
            "text".to_string(),
            "defaultText".to_string(),
        )]))
        .with_meta_properties(MetaPropertiesMap::from([
            ("text".to_string(), json!(null)),
            ("isFocused".to_string(), json!(false)),
            ("isDirty".to_string(), json!(false)),
        ]))
        .with_pane_config(vec![
            PropertyPaneConfig::section(
                "General",
                vec![
                    PropertyPaneConfig::control("Data Type", "inputType", "DROP_DOWN")
                        .with_extra("options", json!(["TEXT", "NUMBER", "PASSWORD", "EMAIL"])),
                    PropertyPaneConfig::control("Default Text", "defaultText", "INPUT_TEXT"),
                    PropertyPaneConfig::control("Placeholder", "placeholderText", "INPUT_TEXT"),
                    PropertyPaneConfig::control("Max Chars", "maxChars", "INPUT_TEXT"),
                ],
            ),
            PropertyPaneConfig::section(
                "Validation",
                vec![
                    PropertyPaneConfig::control("Regex", "regex", "INPUT_TEXT")
                        .with_help_text("Adds a validation to the input which displays an error on failure"),
                    PropertyPaneConfig::control("Required", "isRequired", "SWITCH"),
                ],
            ),
            PropertyPaneConfig::section(
                "Actions",
                vec![
                    PropertyPaneConfig::control("onTextChanged", "onTextChanged", "ACTION_SELECTOR"),
                    PropertyPaneConfig::control("onSubmit", "onSubmit", "ACTION_SELECTOR"),
                ],
            ),
        ])
}

pub(crate) fn default_config() -> WidgetConfig {
    WidgetConfig::new(WidgetKind::from_static(INPUT_WIDGET), "Input", 1, 5)
        .with_prop("inputType", json!("TEXT"))
        .with_prop("label", json!(""))
}
