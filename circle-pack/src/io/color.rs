use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color, parsed from a basic CSS color name or a `#RRGGBB` hex string.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color(0xFF, 0xFF, 0xFF);

    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color(r, g, b));
        }
        let color = match s.to_ascii_lowercase().as_str() {
            "black" => Color(0x00, 0x00, 0x00),
            "white" => Color(0xFF, 0xFF, 0xFF),
            "red" => Color(0xFF, 0x00, 0x00),
            "green" => Color(0x00, 0x80, 0x00),
            "lime" => Color(0x00, 0xFF, 0x00),
            "blue" => Color(0x00, 0x00, 0xFF),
            "yellow" => Color(0xFF, 0xFF, 0x00),
            "orange" => Color(0xFF, 0xA5, 0x00),
            "purple" => Color(0x80, 0x00, 0x80),
            "magenta" | "fuchsia" => Color(0xFF, 0x00, 0xFF),
            "cyan" | "aqua" => Color(0x00, 0xFF, 0xFF),
            "gray" | "grey" => Color(0x80, 0x80, 0x80),
            "silver" => Color(0xC0, 0xC0, 0xC0),
            "maroon" => Color(0x80, 0x00, 0x00),
            "navy" => Color(0x00, 0x00, 0x80),
            "teal" => Color(0x00, 0x80, 0x80),
            "olive" => Color(0x80, 0x80, 0x00),
            "brown" => Color(0xA5, 0x2A, 0x2A),
            "pink" => Color(0xFF, 0xC0, 0xCB),
            _ => return None,
        };
        Some(color)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| anyhow::anyhow!("unknown color: {s:?}"))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
