use crate::error::{ChartSpecError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Fixed set of named palettes for the surrounding UI chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    Default,
    DarkTheme,
}

impl Palette {
    pub fn from_dark_theme(dark_theme: bool) -> Self {
        if dark_theme {
            Palette::DarkTheme
        } else {
            Palette::Default
        }
    }
}

/// Single text/line color derived from the theme selector: white on a
/// dark theme, black otherwise.
pub fn text_color(dark_theme: bool) -> Color {
    if dark_theme {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// RGBA color, serialized as a CSS string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_string(s: &str) -> Result<Self> {
        match s {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            _ => {}
        }
        let hex = s.strip_prefix('#').ok_or_else(|| {
            ChartSpecError::configuration(format!("Unsupported color string: {s}"))
        })?;
        // Byte-range slicing below requires single-byte characters
        if !hex.is_ascii() {
            return Err(ChartSpecError::configuration(format!(
                "Invalid hex color: {s}"
            )));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(&hex[range], 16).map_err(|_| {
                ChartSpecError::configuration(format!("Invalid hex color: {s}"))
            })
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(ChartSpecError::configuration(format!(
                "Invalid hex color: {s}"
            ))),
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Color::BLACK => "black".to_string(),
            Color::WHITE => "white".to_string(),
            Color { r, g, b, a: 255 } => format!("#{r:02x}{g:02x}{b:02x}"),
            Color { r, g, b, a } => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_string(&s).map_err(D::Error::custom)
    }
}

/// Chrome color slots for one named palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromePalette {
    pub theme_primary: Color,
    pub theme_dark: Color,
    pub neutral_light: Color,
    pub neutral_primary: Color,
    pub background: Color,
    pub foreground: Color,
}

lazy_static! {
    pub static ref THEME_PALETTES: HashMap<Palette, ChromePalette> = {
        let mut palettes = HashMap::new();
        palettes.insert(
            Palette::Default,
            ChromePalette {
                theme_primary: Color::rgb(0x00, 0x78, 0xd4),
                theme_dark: Color::rgb(0x00, 0x5a, 0x9e),
                neutral_light: Color::rgb(0xea, 0xea, 0xea),
                neutral_primary: Color::rgb(0x33, 0x33, 0x33),
                background: Color::WHITE,
                foreground: Color::BLACK,
            },
        );
        palettes.insert(
            Palette::DarkTheme,
            ChromePalette {
                theme_primary: Color::rgb(0x28, 0x99, 0xf5),
                theme_dark: Color::rgb(0x6c, 0xb8, 0xf6),
                neutral_light: Color::rgb(0x25, 0x25, 0x25),
                neutral_primary: Color::rgb(0xff, 0xff, 0xff),
                background: Color::BLACK,
                foreground: Color::WHITE,
            },
        );
        palettes
    };
}

pub fn theme_palette(dark_theme: bool) -> &'static ChromePalette {
    &THEME_PALETTES[&Palette::from_dark_theme(dark_theme)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_color_derivation() {
        assert_eq!(text_color(true), Color::WHITE);
        assert_eq!(text_color(false), Color::BLACK);
    }

    #[test]
    fn test_color_css_round_trip() {
        for s in ["black", "white", "#0078d4", "#2899f580"] {
            let color = Color::from_string(s).unwrap();
            assert_eq!(color.to_css(), s);
        }
        assert!(Color::from_string("chartreuse").is_err());
        assert!(Color::from_string("#12345").is_err());
    }

    #[test]
    fn test_non_ascii_hex_rejected() {
        // Six bytes long but not six characters; must not slice mid-char
        assert!(Color::from_string("#aaaé5").is_err());
        assert!(Color::from_string("#ééé").is_err());
        assert!(serde_json::from_str::<Color>(r##""#aaaé5""##).is_err());
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, r#""white""#);
        let color: Color = serde_json::from_str(r##""#005a9e""##).unwrap();
        assert_eq!(color, Color::rgb(0x00, 0x5a, 0x9e));
    }

    #[test]
    fn test_palette_selection() {
        assert_eq!(Palette::from_dark_theme(true), Palette::DarkTheme);
        assert_eq!(theme_palette(true).foreground, Color::WHITE);
        assert_eq!(theme_palette(false).background, Color::WHITE);
    }
}
