//! Icon styles and font families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A visual treatment of an icon. Each style is backed by its own font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Regular,
    Solid,
    Light,
    Brands,
}

impl Style {
    /// All known styles, in catalog order.
    pub const ALL: [Style; 4] = [Style::Regular, Style::Solid, Style::Light, Style::Brands];

    /// The metadata tag for this style.
    pub fn key(self) -> &'static str {
        match self {
            Style::Regular => "regular",
            Style::Solid => "solid",
            Style::Light => "light",
            Style::Brands => "brands",
        }
    }

    /// Title-cased name for human output.
    pub fn title(self) -> &'static str {
        match self {
            Style::Regular => "Regular",
            Style::Solid => "Solid",
            Style::Light => "Light",
            Style::Brands => "Brands",
        }
    }

    /// Parse a metadata style tag. Matching is exact.
    pub fn from_key(key: &str) -> Option<Style> {
        match key {
            "regular" => Some(Style::Regular),
            "solid" => Some(Style::Solid),
            "light" => Some(Style::Light),
            "brands" => Some(Style::Brands),
            _ => None,
        }
    }

    /// Brands is shared by every family.
    pub fn is_cross_family(self) -> bool {
        self == Style::Brands
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::from_key(s).ok_or_else(|| {
            format!(
                "Unknown style: '{}' (expected regular, solid, light or brands)",
                s
            )
        })
    }
}

/// Licensing tier of a font release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Free,
    Pro,
}

impl Family {
    pub fn key(self) -> &'static str {
        match self {
            Family::Free => "free",
            Family::Pro => "pro",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Family::Free => "Free",
            Family::Pro => "Pro",
        }
    }

    /// Family-scoped styles. Brands is not listed; it is available to every family.
    pub fn styles(self) -> &'static [Style] {
        match self {
            Family::Free => &[Style::Regular, Style::Solid],
            Family::Pro => &[Style::Regular, Style::Solid, Style::Light],
        }
    }

    /// Whether icons of `style` are packaged for this family.
    pub fn supports(self, style: Style) -> bool {
        style.is_cross_family() || self.styles().contains(&style)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Family::Free),
            "pro" => Ok(Family::Pro),
            _ => Err(format!("Unknown family: '{}' (expected free or pro)", s)),
        }
    }
}
