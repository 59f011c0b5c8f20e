//! Color vocabulary for catalog themes.
//!
//! A theme token looks like `from-red-500 to-orange-500`: a two-stop gradient
//! where every stop is a hue at one of ten shades. Every swatch resolves to a
//! fixed RGB value so the front-end never has to guess.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::KioskError;

pub const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
    Teal,
    Blue,
    Purple,
    Pink,
    Gray,
}

impl Hue {
    pub const ALL: [Hue; 10] = [
        Hue::Red,
        Hue::Orange,
        Hue::Yellow,
        Hue::Lime,
        Hue::Green,
        Hue::Teal,
        Hue::Blue,
        Hue::Purple,
        Hue::Pink,
        Hue::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hue::Red => "red",
            Hue::Orange => "orange",
            Hue::Yellow => "yellow",
            Hue::Lime => "lime",
            Hue::Green => "green",
            Hue::Teal => "teal",
            Hue::Blue => "blue",
            Hue::Purple => "purple",
            Hue::Pink => "pink",
            Hue::Gray => "gray",
        }
    }

    pub fn from_name(s: &str) -> Option<Hue> {
        Hue::ALL.iter().copied().find(|h| h.as_str() == s)
    }

    /// RGB ramp for shades 50..=900, lightest first.
    fn ramp(self) -> &'static [u32; 10] {
        match self {
            Hue::Red => &[
                0xfef2f2, 0xfee2e2, 0xfecaca, 0xfca5a5, 0xf87171, 0xef4444, 0xdc2626, 0xb91c1c,
                0x991b1b, 0x7f1d1d,
            ],
            Hue::Orange => &[
                0xfff7ed, 0xffedd5, 0xfed7aa, 0xfdba74, 0xfb923c, 0xf97316, 0xea580c, 0xc2410c,
                0x9a3412, 0x7c2d12,
            ],
            Hue::Yellow => &[
                0xfefce8, 0xfef9c3, 0xfef08a, 0xfde047, 0xfacc15, 0xeab308, 0xca8a04, 0xa16207,
                0x854d0e, 0x713f12,
            ],
            Hue::Lime => &[
                0xf7fee7, 0xecfccb, 0xd9f99d, 0xbef264, 0xa3e635, 0x84cc16, 0x65a30d, 0x4d7c0f,
                0x3f6212, 0x365314,
            ],
            Hue::Green => &[
                0xf0fdf4, 0xdcfce7, 0xbbf7d0, 0x86efac, 0x4ade80, 0x22c55e, 0x16a34a, 0x15803d,
                0x166534, 0x14532d,
            ],
            Hue::Teal => &[
                0xf0fdfa, 0xccfbf1, 0x99f6e4, 0x5eead4, 0x2dd4bf, 0x14b8a6, 0x0d9488, 0x0f766e,
                0x115e59, 0x134e4a,
            ],
            Hue::Blue => &[
                0xeff6ff, 0xdbeafe, 0xbfdbfe, 0x93c5fd, 0x60a5fa, 0x3b82f6, 0x2563eb, 0x1d4ed8,
                0x1e40af, 0x1e3a8a,
            ],
            Hue::Purple => &[
                0xfaf5ff, 0xf3e8ff, 0xe9d5ff, 0xd8b4fe, 0xc084fc, 0xa855f7, 0x9333ea, 0x7e22ce,
                0x6b21a8, 0x581c87,
            ],
            Hue::Pink => &[
                0xfdf2f8, 0xfce7f3, 0xfbcfe8, 0xf9a8d4, 0xf472b6, 0xec4899, 0xdb2777, 0xbe185d,
                0x9d174d, 0x831843,
            ],
            Hue::Gray => &[
                0xf9fafb, 0xf3f4f6, 0xe5e7eb, 0xd1d5db, 0x9ca3af, 0x6b7280, 0x4b5563, 0x374151,
                0x1f2937, 0x111827,
            ],
        }
    }
}

/// One hue at one shade, e.g. `red-400`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swatch {
    hue: Hue,
    shade: u16,
}

impl Swatch {
    pub fn new(hue: Hue, shade: u16) -> Option<Swatch> {
        SHADES.contains(&shade).then_some(Swatch { hue, shade })
    }

    /// Callers guarantee `shade` is one of [`SHADES`].
    pub(crate) const fn of(hue: Hue, shade: u16) -> Swatch {
        Swatch { hue, shade }
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    pub fn shade(&self) -> u16 {
        self.shade
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let idx = SHADES.iter().position(|s| *s == self.shade).unwrap_or(5);
        let hex = self.hue.ramp()[idx];
        ((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.hue.as_str(), self.shade)
    }
}

/// Two-stop gradient used as the base visual theme of tabs and menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gradient {
    pub from: Swatch,
    pub to: Swatch,
}

impl Gradient {
    pub const fn new(from: Swatch, to: Swatch) -> Self {
        Self { from, to }
    }

    /// A flat fill is a gradient whose stops are equal.
    pub const fn solid(swatch: Swatch) -> Self {
        Self { from: swatch, to: swatch }
    }

    pub fn is_solid(&self) -> bool {
        self.from == self.to
    }
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*from-([a-z]+)-(\d{2,3})\s+to-([a-z]+)-(\d{2,3})\s*$")
            .expect("theme token pattern is valid")
    })
}

fn parse_swatch(token: &str, hue: &str, shade: &str) -> Result<Swatch, KioskError> {
    let hue = Hue::from_name(hue)
        .ok_or_else(|| KioskError::Catalog(format!("unknown hue '{}' in theme '{}'", hue, token)))?;
    let shade: u16 = shade
        .parse()
        .map_err(|_| KioskError::Catalog(format!("bad shade in theme '{}'", token)))?;
    Swatch::new(hue, shade)
        .ok_or_else(|| KioskError::Catalog(format!("unsupported shade {} in theme '{}'", shade, token)))
}

impl FromStr for Gradient {
    type Err = KioskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = token_regex()
            .captures(s)
            .ok_or_else(|| KioskError::Catalog(format!("malformed theme token '{}'", s)))?;
        let from = parse_swatch(s, &caps[1], &caps[2])?;
        let to = parse_swatch(s, &caps[3], &caps[4])?;
        Ok(Gradient { from, to })
    }
}

impl TryFrom<String> for Gradient {
    type Error = KioskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gradient> for String {
    fn from(g: Gradient) -> Self {
        g.to_string()
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from-{} to-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_token() {
        let g: Gradient = "from-red-500 to-orange-500".parse().unwrap();
        assert_eq!(g.from, Swatch::of(Hue::Red, 500));
        assert_eq!(g.to, Swatch::of(Hue::Orange, 500));
        assert_eq!(g.to_string(), "from-red-500 to-orange-500");
    }

    #[test]
    fn test_rejects_unknown_hue_and_shade() {
        assert!("from-magenta-500 to-orange-500".parse::<Gradient>().is_err());
        assert!("from-red-550 to-orange-500".parse::<Gradient>().is_err());
        assert!("bg-red-500".parse::<Gradient>().is_err());
    }

    #[test]
    fn test_swatch_rgb() {
        assert_eq!(Swatch::of(Hue::Blue, 700).rgb(), (0x1d, 0x4e, 0xd8));
        assert_eq!(Swatch::of(Hue::Gray, 50).rgb(), (0xf9, 0xfa, 0xfb));
        assert_eq!(Swatch::of(Hue::Red, 900).rgb(), (0x7f, 0x1d, 0x1d));
    }

    #[test]
    fn test_swatch_new_validates_shade() {
        assert!(Swatch::new(Hue::Teal, 400).is_some());
        assert!(Swatch::new(Hue::Teal, 450).is_none());
    }

    #[test]
    fn test_gradient_serde_as_string() {
        let g = Gradient::solid(Swatch::of(Hue::Gray, 700));
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"from-gray-700 to-gray-700\"");
        let back: Gradient = serde_json::from_str(&json).unwrap();
        assert!(back.is_solid());
    }
}
