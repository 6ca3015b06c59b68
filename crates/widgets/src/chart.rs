//! Chart widget
//!
//! Each entry of `chartData` is one series, edited in its own nested
//! panel.

use crate::basic::BasicWidget;
use crate::CHART_WIDGET;
use anyhow::Result;
use serde_json::json;
use widgetry_core::validation::with_base_validation;
use widgetry_core::{
    BoxedWidget, DerivedPropertiesMap, MetaPropertiesMap, PanelConfig, PropertyPaneConfig,
    ValidationType, WidgetBuilder, WidgetConfig, WidgetKind, WidgetProps, WidgetRegistration,
};

pub struct ChartWidgetBuilder;

impl WidgetBuilder for ChartWidgetBuilder {
    fn build_widget(&self, props: WidgetProps) -> Result<BoxedWidget> {
        Ok(Box::new(BasicWidget::new(props)))
    }
}

pub(crate) fn registration() -> WidgetRegistration {
    WidgetRegistration::new(WidgetKind::from_static(CHART_WIDGET), ChartWidgetBuilder)
        .with_validations(with_base_validation([
            ("chartName", ValidationType::Text),
            ("chartType", ValidationType::Text),
            ("xAxisName", ValidationType::Text),
            ("yAxisName", ValidationType::Text),
            ("chartData", ValidationType::ChartSeriesData),
            ("customFusionChartConfig", ValidationType::Object),
        ]))
        .with_derived_properties(DerivedPropertiesMap::new())
        .with_meta_properties(MetaPropertiesMap::from([(
            "selectedDataPoint".to_string(),
            json!(null),
        )]))
        .with_pane_config(pane_config())
}

fn series_panel() -> PanelConfig {
    PanelConfig::new(vec![
        PropertyPaneConfig::control("Series Name", "seriesName", "INPUT_TEXT"),
        PropertyPaneConfig::section(
            "Data",
            vec![PropertyPaneConfig::control("Series Data", "data", "INPUT_TEXT")
                .with_help_text("Input data in the format [{ \"x\": \"Mon\", \"y\": 10 }]")
                .with_extra("isBindProperty", json!(true))],
        ),
    ])
    .with_title_property("seriesName")
    .with_panel_id_property("id")
}

fn pane_config() -> Vec<PropertyPaneConfig> {
    vec![
        PropertyPaneConfig::section(
            "General",
            vec![
                PropertyPaneConfig::control("Title", "chartName", "INPUT_TEXT"),
                PropertyPaneConfig::control("Chart Type", "chartType", "DROP_DOWN").with_extra(
                    "options",
                    json!(["LINE_CHART", "BAR_CHART", "PIE_CHART", "COLUMN_CHART", "AREA_CHART"]),
                ),
                PropertyPaneConfig::control("Chart Series", "chartData", "CHART_DATA")
                    .with_panel(series_panel()),
            ],
        ),
        PropertyPaneConfig::section(
            "Axis",
            vec![
                PropertyPaneConfig::control("x-axis Label", "xAxisName", "INPUT_TEXT"),
                PropertyPaneConfig::control("y-axis Label", "yAxisName", "INPUT_TEXT"),
            ],
        ),
        PropertyPaneConfig::section(
            "Actions",
            vec![PropertyPaneConfig::control(
                "onDataPointClick",
                "onDataPointClick",
                "ACTION_SELECTOR",
            )],
        ),
    ]
}

pub(crate) fn default_config() -> WidgetConfig {
    WidgetConfig::new(WidgetKind::from_static(CHART_WIDGET), "Chart", 8, 6)
        .with_prop("chartType", json!("LINE_CHART"))
        .with_prop("chartName", json!("Sales on working days"))
        .with_prop(
            "chartData",
            json!({
                "series1": {
                    "seriesName": "Sales",
                    "data": [
                        { "x": "Mon", "y": 10000 },
                        { "x": "Tue", "y": 12000 },
                        { "x": "Wed", "y": 32000 }
                    ]
                }
            }),
        )
        .with_prop("xAxisName", json!("Last Week"))
        .with_prop("yAxisName", json!("Total Order Revenue $"))
}
