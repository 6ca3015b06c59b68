//! Plain widget instance shared by the leaf widget kinds

use widgetry_core::{Widget, WidgetProps};

/// Widget instance that only carries its props
#[derive(Debug, Clone)]
pub struct BasicWidget {
    props: WidgetProps,
}

impl BasicWidget {
    pub fn new(props: WidgetProps) -> Self {
        Self { props }
    }
}

impl Widget for BasicWidget {
    fn props(&self) -> &WidgetProps {
        &self.props
    }
}
