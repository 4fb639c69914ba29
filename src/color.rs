use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;
use crate::pixel_buffer::Rgba;

/// Maximum number of entries kept in the recent-colors list
pub const MAX_RECENT_COLORS: usize = 5;

/// An opaque fill color. Alpha is always 255 when painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FillColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_rgba(self) -> Rgba {
        [self.r, self.g, self.b, 255]
    }

    /// True if the RGB channels of `pixel` match exactly (alpha ignored).
    pub fn matches_rgb(self, pixel: Rgba) -> bool {
        pixel[0] == self.r && pixel[1] == self.g && pixel[2] == self.b
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn from_color32(color: egui::Color32) -> Self {
        Self::rgb(color.r(), color.g(), color.b())
    }
}

impl FromStr for FillColor {
    type Err = ColorParseError;

    /// Parses `#RRGGBB`; the leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength(hex.len()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(s.to_owned()));
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidHex(s.to_owned()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for FillColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FillColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The seasonal color sets offered by the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorCategory {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl ColorCategory {
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    pub fn colors(self) -> [FillColor; 5] {
        match self {
            Self::Spring => [
                FillColor::rgb(0xF2, 0x88, 0xB9),
                FillColor::rgb(0xF1, 0xD5, 0xE4),
                FillColor::rgb(0x85, 0xC8, 0xF2),
                FillColor::rgb(0xF1, 0xCE, 0x66),
                FillColor::rgb(0xF2, 0x6D, 0x6E),
            ],
            Self::Summer => [
                FillColor::rgb(0x91, 0xE0, 0xF1),
                FillColor::rgb(0x63, 0xB1, 0xF3),
                FillColor::rgb(0xF1, 0xCB, 0x06),
                FillColor::rgb(0xF2, 0x8A, 0x07),
                FillColor::rgb(0xBF, 0x41, 0x11),
            ],
            Self::Autumn => [
                FillColor::rgb(0x46, 0x58, 0x02),
                FillColor::rgb(0x99, 0xCF, 0xF1),
                FillColor::rgb(0xD9, 0x75, 0x1F),
                FillColor::rgb(0x73, 0x17, 0x02),
                FillColor::rgb(0xD9, 0x05, 0x04),
            ],
            Self::Winter => [
                FillColor::rgb(0xBE, 0x9A, 0x78),
                FillColor::rgb(0xD5, 0xE7, 0xF3),
                FillColor::rgb(0xBB, 0xCD, 0xD9),
                FillColor::rgb(0xF2, 0xEB, 0xE5),
                FillColor::rgb(0xBF, 0x8A, 0x84),
            ],
        }
    }
}

/// Which swatches the palette bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteMode {
    Seasonal(ColorCategory),
    Recent,
}

impl Default for PaletteMode {
    fn default() -> Self {
        Self::Seasonal(ColorCategory::default())
    }
}

/// Swatch state shown next to the canvas: a seasonal set or recently picked colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    mode: PaletteMode,
    recent: Vec<FillColor>,
}

impl Palette {
    pub fn mode(&self) -> PaletteMode {
        self.mode
    }

    pub fn recent(&self) -> &[FillColor] {
        &self.recent
    }

    /// Switches to a seasonal set.
    pub fn select_category(&mut self, category: ColorCategory) {
        self.mode = PaletteMode::Seasonal(category);
    }

    /// Moves `color` to the front of the recent list, dropping duplicates and the overflow.
    pub fn remember(&mut self, color: FillColor) {
        self.recent.retain(|c| *c != color);
        self.recent.insert(0, color);
        self.recent.truncate(MAX_RECENT_COLORS);
    }

    /// Shows the recently used colors.
    pub fn show_recent(&mut self) {
        self.mode = PaletteMode::Recent;
    }

    /// Records a custom color and switches the bar to recent colors.
    pub fn select_custom(&mut self, color: FillColor) {
        self.remember(color);
        self.mode = PaletteMode::Recent;
    }

    /// The swatches currently on display
    pub fn swatches(&self) -> Vec<FillColor> {
        match self.mode {
            PaletteMode::Seasonal(category) => category.colors().to_vec(),
            PaletteMode::Recent => self.recent.clone(),
        }
    }
}
