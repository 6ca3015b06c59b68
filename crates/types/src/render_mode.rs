//! Render mode supplied by the rendering layer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Context in which a widget is being instantiated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenderMode {
    /// Preview inside the widget picker
    ComponentPane,
    /// Editing canvas
    #[default]
    #[serde(alias = "EDIT")]
    Canvas,
    /// Editing canvas with the widget selected
    CanvasSelected,
    /// Published view
    #[serde(alias = "VIEW")]
    Page,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::ComponentPane => "COMPONENT_PANE",
            RenderMode::Canvas => "CANVAS",
            RenderMode::CanvasSelected => "CANVAS_SELECTED",
            RenderMode::Page => "PAGE",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown render mode: {0}")]
pub struct UnknownRenderMode(pub String);

impl FromStr for RenderMode {
    type Err = UnknownRenderMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "COMPONENT_PANE" => Ok(RenderMode::ComponentPane),
            "CANVAS" | "EDIT" => Ok(RenderMode::Canvas),
            "CANVAS_SELECTED" => Ok(RenderMode::CanvasSelected),
            "PAGE" | "VIEW" => Ok(RenderMode::Page),
            _ => Err(UnknownRenderMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("EDIT".parse::<RenderMode>(), Ok(RenderMode::Canvas));
        assert_eq!("canvas-selected".parse::<RenderMode>(), Ok(RenderMode::CanvasSelected));
        assert_eq!("view".parse::<RenderMode>(), Ok(RenderMode::Page));
        assert!("PREVIEW".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_serde_alias() {
        let mode: RenderMode = serde_json::from_str("\"EDIT\"").unwrap();
        assert_eq!(mode, RenderMode::Canvas);
        assert_eq!(serde_json::to_string(&RenderMode::Page).unwrap(), "\"PAGE\"");
    }
}
