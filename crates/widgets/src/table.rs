//! Table widget

use crate::basic::BasicWidget;
use crate::TABLE_WIDGET;
use anyhow::Result;
use serde_json::json;
use widgetry_core::validation::with_base_validation;
use widgetry_core::{
    BoxedWidget, DefaultPropertiesMap, DerivedPropertiesMap, MetaPropertiesMap, PanelConfig,
    PropertyPaneConfig, ValidationType, WidgetBuilder, WidgetConfig, WidgetKind, WidgetProps,
    WidgetRegistration,
};

pub struct TableWidgetBuilder;

impl WidgetBuilder for TableWidgetBuilder {
    fn build_widget(&self, props: WidgetProps) -> Result<BoxedWidget> {
        Ok(Box::new(BasicWidget::new(props)))
    }
}

pub(crate) fn registration() -> WidgetRegistration {
    WidgetRegistration::new(WidgetKind::from_static(TABLE_WIDGET), TableWidgetBuilder)
        .with_validations(with_base_validation([
            ("tableData", ValidationType::TableData),
            ("primaryColumns", ValidationType::ColumnPropertiesArray),
            ("defaultSearchText", ValidationType::Text),
            ("defaultSelectedRow", ValidationType::Number),
            ("pageSize", ValidationType::Number),
        ]))
        .with_derived_properties(DerivedPropertiesMap::from([
            (
                "selectedRow".to_string(),
                "{{ this.filteredTableData[this.selectedRowIndex] ?? {} }}".to_string(),
            ),
            (
                "pageSize".to_string(),
                "{{ Math.floor((this.bottomRow - this.topRow - 1) / 4) }}".to_string(),
            ),
        ]))
        .with_default_properties(DefaultPropertiesMap::from([
            ("searchText".to_string(), "defaultSearchText".to_string()),
            ("selectedRowIndex".to_string(), "defaultSelectedRow".to_string()),
        ]))
        .with_meta_properties(MetaPropertiesMap::from([
            ("pageNo".to_string(), json!(1)),
            ("selectedRowIndex".to_string(), json!(-1)),
            ("searchText".to_string(), json!("")),
            ("sortedColumn".to_string(), json!(null)),
        ]))
        .with_pane_config(pane_config())
}

fn column_panel() -> PanelConfig {
    PanelConfig::new(vec![
        PropertyPaneConfig::section(
            "Column Control",
            vec![
                PropertyPaneConfig::control("Column Type", "columnType", "DROP_DOWN").with_extra(
                    "options",
                    json!(["text", "number", "date", "image", "url", "button"]),
                ),
                PropertyPaneConfig::control("Computed Value", "computedValue", "COMPUTE_VALUE"),
                PropertyPaneConfig::control("Visible", "isVisible", "SWITCH"),
            ],
        ),
        PropertyPaneConfig::section(
            "Styles",
            vec![
                PropertyPaneConfig::control("Text Align", "horizontalAlignment", "ICON_TABS"),
                PropertyPaneConfig::control("Text Color", "textColor", "COLOR_PICKER"),
            ],
        ),
    ])
    .with_title_property("label")
    .with_panel_id_property("id")
}

fn pane_config() -> Vec<PropertyPaneConfig> {
    vec![
        PropertyPaneConfig::section(
            "General",
            vec![
                PropertyPaneConfig::control("Table Data", "tableData", "INPUT_TEXT")
                    .with_extra("isBindProperty", json!(true)),
                PropertyPaneConfig::control("Columns", "primaryColumns", "PRIMARY_COLUMNS")
                    .with_panel(column_panel()),
                PropertyPaneConfig::control("Default Search Text", "defaultSearchText", "INPUT_TEXT"),
                PropertyPaneConfig::control("Default Selected Row", "defaultSelectedRow", "INPUT_TEXT"),
            ],
        ),
        PropertyPaneConfig::section(
            "Actions",
            vec![
                PropertyPaneConfig::control("onRowSelected", "onRowSelected", "ACTION_SELECTOR"),
                PropertyPaneConfig::control("onPageChange", "onPageChange", "ACTION_SELECTOR"),
                PropertyPaneConfig::control("onSearchTextChanged", "onSearchTextChanged", "ACTION_SELECTOR"),
            ],
        ),
    ]
}

pub(crate) fn default_config() -> WidgetConfig {
    WidgetConfig::new(WidgetKind::from_static(TABLE_WIDGET), "Table", 7, 8)
        .with_prop("label", json!("Data"))
        .with_prop(
            "tableData",
            json!([
                { "id": 2381224, "email": "michael.lawson@reqres.in", "userName": "Michael Lawson" },
                { "id": 2736212, "email": "lindsay.ferguson@reqres.in", "userName": "Lindsay Ferguson" }
            ]),
        )
        .with_prop("textSize", json!("PARAGRAPH"))
}
