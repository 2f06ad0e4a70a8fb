use serde::Serialize;

/// Accent used for headings, metric text and chart fonts in both modes.
pub const FONT_COLOR: &str = "#00BFFF";

/// Page palette. Has no influence on any computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub dark: bool,
    pub background: &'static str,
    pub card_background: &'static str,
    pub card_border: &'static str,
    pub font_color: &'static str,
}

impl Theme {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                dark,
                background: "#0e0e10",
                card_background: "#1a1a1a",
                card_border: "#444444",
                font_color: FONT_COLOR,
            }
        } else {
            Self {
                dark,
                background: "#f9fbfd",
                card_background: "#ffffff",
                card_border: "#dce3ec",
                font_color: FONT_COLOR,
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(true)
    }
}
