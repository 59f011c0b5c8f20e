//! Palette projection for the color-vision-deficiency mode.
//!
//! In normal mode every element keeps the gradient it was configured with.
//! In the alternate mode the gradients are replaced by a small set of flat,
//! high-contrast styles: tabs by a table keyed on category id, menu items by
//! the hue bucket their gradient starts in.

use crate::app::domain::catalog::CategoryId;
use crate::app::domain::swatch::{Gradient, Hue, Swatch};

/// Base theme of the selected tab.
pub const ACTIVE_TAB_THEME: Gradient =
    Gradient::new(Swatch::of(Hue::Yellow, 500), Swatch::of(Hue::Orange, 500));

/// Unselected tabs stay flat gray in both modes.
pub const INACTIVE_TAB_THEME: Gradient = Gradient::solid(Swatch::of(Hue::Gray, 700));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    Normal,
    ColorVisionAlternate,
}

impl PaletteMode {
    pub fn from_flag(color_vision_mode: bool) -> Self {
        if color_vision_mode {
            PaletteMode::ColorVisionAlternate
        } else {
            PaletteMode::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role<'a> {
    Tab(&'a CategoryId),
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    White,
    Black,
    Swatch(Swatch),
}

impl Ink {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Ink::White => (255, 255, 255),
            Ink::Black => (0, 0, 0),
            Ink::Swatch(s) => s.rgb(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub ink: Ink,
    pub width: u8,
}

/// Flat styles used by the alternate palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternateStyle {
    TabBlue,
    TabAmber,
    TabViolet,
    ItemBlue,
    ItemAmber,
    ItemViolet,
    Neutral,
}

impl AlternateStyle {
    pub fn background(&self) -> Swatch {
        match self {
            AlternateStyle::TabBlue => Swatch::of(Hue::Blue, 700),
            AlternateStyle::TabAmber => Swatch::of(Hue::Yellow, 600),
            AlternateStyle::TabViolet => Swatch::of(Hue::Purple, 700),
            AlternateStyle::ItemBlue => Swatch::of(Hue::Blue, 600),
            AlternateStyle::ItemAmber => Swatch::of(Hue::Yellow, 500),
            AlternateStyle::ItemViolet => Swatch::of(Hue::Purple, 600),
            AlternateStyle::Neutral => Swatch::of(Hue::Gray, 600),
        }
    }

    pub fn text(&self) -> Ink {
        match self {
            AlternateStyle::TabAmber | AlternateStyle::ItemAmber => Ink::Black,
            _ => Ink::White,
        }
    }

    pub fn border(&self) -> Border {
        match self {
            AlternateStyle::TabBlue | AlternateStyle::TabViolet => Border { ink: Ink::White, width: 2 },
            AlternateStyle::TabAmber => Border { ink: Ink::Black, width: 2 },
            AlternateStyle::ItemBlue => Border {
                ink: Ink::Swatch(Swatch::of(Hue::Blue, 800)),
                width: 2,
            },
            AlternateStyle::ItemAmber => Border {
                ink: Ink::Swatch(Swatch::of(Hue::Yellow, 700)),
                width: 2,
            },
            AlternateStyle::ItemViolet => Border {
                ink: Ink::Swatch(Swatch::of(Hue::Purple, 800)),
                width: 2,
            },
            AlternateStyle::Neutral => Border {
                ink: Ink::Swatch(Swatch::of(Hue::Gray, 400)),
                width: 1,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveStyle {
    Base(Gradient),
    Alternate(AlternateStyle),
}

const TAB_STYLES: &[(&str, AlternateStyle)] = &[
    ("hamburgers", AlternateStyle::TabBlue),
    ("drinks", AlternateStyle::TabAmber),
    ("sides", AlternateStyle::TabViolet),
];

/// Hue buckets for item gradients, checked in order. green-400 appears in
/// both the cool and the green bucket; the cool bucket wins.
const ITEM_BUCKETS: &[(&[Swatch], AlternateStyle)] = &[
    (
        &[
            Swatch::of(Hue::Red, 400),
            Swatch::of(Hue::Yellow, 400),
            Swatch::of(Hue::Orange, 400),
            Swatch::of(Hue::Purple, 400),
        ],
        AlternateStyle::ItemBlue,
    ),
    (
        &[
            Swatch::of(Hue::Blue, 400),
            Swatch::of(Hue::Gray, 400),
            Swatch::of(Hue::Green, 400),
            Swatch::of(Hue::Teal, 400),
        ],
        AlternateStyle::ItemAmber,
    ),
    (
        &[Swatch::of(Hue::Green, 400), Swatch::of(Hue::Lime, 400)],
        AlternateStyle::ItemViolet,
    ),
];

fn tab_style(category: &CategoryId) -> AlternateStyle {
    TAB_STYLES
        .iter()
        .find(|(id, _)| *id == category.as_str())
        .map(|(_, style)| *style)
        .unwrap_or(AlternateStyle::Neutral)
}

fn item_style(base: &Gradient) -> AlternateStyle {
    ITEM_BUCKETS
        .iter()
        .find(|(swatches, _)| swatches.contains(&base.from))
        .map(|(_, style)| *style)
        .unwrap_or(AlternateStyle::Neutral)
}

pub fn project(base: &Gradient, mode: PaletteMode, role: Role<'_>) -> EffectiveStyle {
    match mode {
        PaletteMode::Normal => EffectiveStyle::Base(*base),
        PaletteMode::ColorVisionAlternate => EffectiveStyle::Alternate(match role {
            Role::Tab(category) => tab_style(category),
            Role::Item => item_style(base),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(token: &str) -> Gradient {
        token.parse().unwrap()
    }

    #[test]
    fn test_normal_mode_is_identity() {
        let themes = ["from-red-500 to-orange-500", "from-gray-700 to-gray-700", "from-lime-400 to-green-400"];
        for token in themes {
            let base = g(token);
            for cat in ["hamburgers", "drinks", "desserts"] {
                let id = CategoryId::new(cat);
                assert_eq!(project(&base, PaletteMode::Normal, Role::Tab(&id)), EffectiveStyle::Base(base));
            }
            assert_eq!(project(&base, PaletteMode::Normal, Role::Item), EffectiveStyle::Base(base));
        }
    }

    #[test]
    fn test_tab_ignores_base_theme() {
        let hamburgers = CategoryId::new("hamburgers");
        for token in ["from-red-500 to-orange-500", "from-teal-400 to-blue-400", "from-pink-900 to-pink-50"] {
            assert_eq!(
                project(&g(token), PaletteMode::ColorVisionAlternate, Role::Tab(&hamburgers)),
                EffectiveStyle::Alternate(AlternateStyle::TabBlue)
            );
        }
    }

    #[test]
    fn test_tab_table() {
        let base = g("from-yellow-500 to-orange-500");
        let style = |cat: &str| {
            let id = CategoryId::new(cat);
            project(&base, PaletteMode::ColorVisionAlternate, Role::Tab(&id))
        };
        assert_eq!(style("drinks"), EffectiveStyle::Alternate(AlternateStyle::TabAmber));
        assert_eq!(style("sides"), EffectiveStyle::Alternate(AlternateStyle::TabViolet));
        assert_eq!(style("desserts"), EffectiveStyle::Alternate(AlternateStyle::Neutral));
    }

    #[test]
    fn test_item_buckets() {
        let style = |token: &str| project(&g(token), PaletteMode::ColorVisionAlternate, Role::Item);
        assert_eq!(style("from-red-400 to-pink-500"), EffectiveStyle::Alternate(AlternateStyle::ItemBlue));
        assert_eq!(style("from-yellow-400 to-orange-400"), EffectiveStyle::Alternate(AlternateStyle::ItemBlue));
        assert_eq!(style("from-purple-400 to-blue-500"), EffectiveStyle::Alternate(AlternateStyle::ItemBlue));
        assert_eq!(style("from-teal-400 to-blue-400"), EffectiveStyle::Alternate(AlternateStyle::ItemAmber));
        assert_eq!(style("from-green-400 to-lime-400"), EffectiveStyle::Alternate(AlternateStyle::ItemAmber));
        assert_eq!(style("from-lime-400 to-green-400"), EffectiveStyle::Alternate(AlternateStyle::ItemViolet));
        assert_eq!(style("from-red-500 to-orange-500"), EffectiveStyle::Alternate(AlternateStyle::Neutral));
        assert_eq!(style("from-pink-400 to-red-400"), EffectiveStyle::Alternate(AlternateStyle::Neutral));
    }

    #[test]
    fn test_projection_is_deterministic() {
        let base = g("from-orange-400 to-red-400");
        let id = CategoryId::new("sides");
        let first = project(&base, PaletteMode::ColorVisionAlternate, Role::Tab(&id));
        for _ in 0..10 {
            assert_eq!(project(&base, PaletteMode::ColorVisionAlternate, Role::Tab(&id)), first);
        }
    }

    #[test]
    fn test_alternate_styles_contrast() {
        assert_eq!(AlternateStyle::TabAmber.text(), Ink::Black);
        assert_eq!(AlternateStyle::TabBlue.text(), Ink::White);
        assert_eq!(AlternateStyle::Neutral.border().width, 1);
        assert_eq!(AlternateStyle::ItemBlue.background().rgb(), (0x25, 0x63, 0xeb));
    }
}
