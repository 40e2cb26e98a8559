use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::interface::detection::DetectionCategory;
use crate::prelude::{TimelineError, TimelineResult};

/// 8-bit RGBA color, written as `#RRGGBB` or `#RRGGBBAA` in configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn parse(value: &str) -> TimelineResult<Self> {
        let hex = value
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| TimelineError::InvalidColor(format!("{value:?} lacks '#'")))?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(TimelineError::InvalidColor(format!(
                "{value:?} is not #RRGGBB or #RRGGBBAA"
            )));
        }
        // from_str_radix alone would accept a sign such as "+F"
        if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(TimelineError::InvalidColor(format!("{value:?} is not hex")));
        }
        let channel = |idx: usize| {
            u8::from_str_radix(&hex[idx..idx + 2], 16)
                .map_err(|_| TimelineError::InvalidColor(format!("{value:?} is not hex")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }

    /// Same color with its alpha scaled by `factor`.
    pub fn scale_alpha(self, factor: f32) -> Self {
        let alpha = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a: alpha, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = TimelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgba::parse(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Display settings for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryStyle {
    pub color: Rgba,
    #[serde(default)]
    pub label: Option<String>,
}

/// Category to color/label table used when indexing intervals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CategoryPalette {
    pub categories: BTreeMap<DetectionCategory, CategoryStyle>,
    /// Used for any category missing from `categories`.
    pub default_color: Rgba,
}

impl CategoryPalette {
    pub const DEFAULT_COLOR: Rgba = Rgba::rgb(0x9E, 0x9E, 0x9E);

    /// Palette with no category entries; everything resolves to the default color.
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
            default_color: Self::DEFAULT_COLOR,
        }
    }

    pub fn with_category(
        mut self,
        category: DetectionCategory,
        color: Rgba,
        label: impl Into<String>,
    ) -> Self {
        self.categories.insert(
            category,
            CategoryStyle {
                color,
                label: Some(label.into()),
            },
        );
        self
    }

    pub fn color_for(&self, category: DetectionCategory) -> Rgba {
        self.categories
            .get(&category)
            .map(|style| style.color)
            .unwrap_or(self.default_color)
    }

    pub fn label_for(&self, category: DetectionCategory) -> String {
        self.categories
            .get(&category)
            .and_then(|style| style.label.clone())
            .unwrap_or_else(|| category.name().to_string())
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        use DetectionCategory::*;
        Self::empty()
            .with_category(Person, Rgba::rgb(0x42, 0x85, 0xF4), "Person")
            .with_category(Vehicle, Rgba::rgb(0xF4, 0xB4, 0x00), "Vehicle")
            .with_category(Animal, Rgba::rgb(0x0F, 0x9D, 0x58), "Animal")
            .with_category(Motion, Rgba::rgb(0xAB, 0x47, 0xBC), "Motion")
            .with_category(Package, Rgba::rgb(0x8D, 0x6E, 0x63), "Package")
            .with_category(Face, Rgba::rgb(0xEC, 0x40, 0x7A), "Face")
            .with_category(LicensePlate, Rgba::rgb(0x26, 0xA6, 0x9A), "License plate")
            .with_category(Audio, Rgba::rgb(0xFF, 0x70, 0x43), "Audio")
    }
}
