use chartspec_core::context::SpecViewOptions;
use chartspec_core::theme::{text_color, Color};
use serde::{Deserialize, Serialize};

/// Colors pushed to the active rendering surface. Axis line, axis text,
/// and the hover highlight all share the single theme-derived color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    pub axis_line: Color,
    pub axis_text: Color,
    pub hovered_item: Color,
}

/// Configuration of the active viewer, mutable by replacement only: a new
/// value is built from scratch on every theme change and pushed whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerOptions {
    pub colors: ColorSettings,
}

impl ViewerOptions {
    /// An unset theme behaves as the light theme.
    pub fn from_dark_theme(dark_theme: Option<bool>) -> Self {
        let color = text_color(dark_theme.unwrap_or(false));
        Self {
            colors: ColorSettings {
                axis_line: color,
                axis_text: color,
                hovered_item: color,
            },
        }
    }

    /// View options for the spec assembly layer, carrying the same derived
    /// colors into axis construction.
    pub fn spec_view_options(&self) -> SpecViewOptions {
        SpecViewOptions {
            axis_color: self.colors.axis_line.to_css(),
            text_color: self.colors.axis_text.to_css(),
            ..Default::default()
        }
    }
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self::from_dark_theme(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_color_per_theme() {
        let dark = ViewerOptions::from_dark_theme(Some(true));
        assert_eq!(dark.colors.axis_line, Color::WHITE);
        assert_eq!(dark.colors.axis_text, Color::WHITE);
        assert_eq!(dark.colors.hovered_item, Color::WHITE);

        assert_eq!(
            ViewerOptions::from_dark_theme(Some(false)).colors.axis_text,
            Color::BLACK
        );
        assert_eq!(
            ViewerOptions::from_dark_theme(None).colors.axis_text,
            Color::BLACK
        );
    }

    #[test]
    fn test_spec_view_options_bridge() {
        let options = ViewerOptions::from_dark_theme(Some(true)).spec_view_options();
        assert_eq!(options.axis_color, "white");
        assert_eq!(options.text_color, "white");
    }
}
