//! Fakes shared by the unit tests

use crate::builder::{BoxedWidget, Widget};
use crate::registry::WidgetRegistration;
use crate::validation::with_base_validation;
use anyhow::{anyhow, Result};
use serde_json::json;
use widgetry_types::{
    DefaultPropertiesMap, MetaPropertiesMap, ValidationType, WidgetKind, WidgetProps,
};

pub(crate) struct RecordingWidget {
    props: WidgetProps,
}

impl Widget for RecordingWidget {
    fn props(&self) -> &WidgetProps {
        &self.props
    }
}

pub(crate) fn recording_builder() -> impl Fn(WidgetProps) -> Result<BoxedWidget> + Send + Sync {
    |props| Ok(Box::new(RecordingWidget { props }) as BoxedWidget)
}

pub(crate) fn failing_builder() -> impl Fn(WidgetProps) -> Result<BoxedWidget> + Send + Sync {
    |props| Err(anyhow!("cannot build {}", props.widget_id))
}

pub(crate) fn text_registration() -> WidgetRegistration {
    WidgetRegistration::new(WidgetKind::from_static("TEXT_WIDGET"), recording_builder())
        .with_validations(with_base_validation([("text", ValidationType::Text)]))
        .with_default_properties(DefaultPropertiesMap::from([(
            "text".to_string(),
            String::new(),
        )]))
        .with_meta_properties(MetaPropertiesMap::from([(
            "isFocused".to_string(),
            json!(false),
        )]))
}
