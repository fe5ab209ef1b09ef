// Configuration loading

pub mod column;
pub mod comparator;
pub mod error;
pub mod settings;

pub use comparator::{
    ColorCodes, ColumnMapping, ComparatorConfig, OutputColumn, OutputColumns, OutputConfig,
    SheetConfig,
};
pub use error::ConfigError;

/// 8-bit ARGB fill color.
///
/// Written in config files as `RRGGBB` or `AARRGGBB` hex, with an optional
/// leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    /// Convert from hex u32 (0xRRGGBB)
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse `RRGGBB` / `AARRGGBB`.
    pub fn parse(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Self::from_hex(value)),
            8 => Some(Self {
                a: (value >> 24) as u8,
                ..Self::from_hex(value & 0x00FF_FFFF)
            }),
            _ => None,
        }
    }

    /// 0xRRGGBB, alpha dropped (spreadsheet fills are opaque).
    pub fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 0xFF {
            write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color '{value}': expected RRGGBB or AARRGGBB"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
