use fltk::{draw, enums::Color};

use crate::app::domain::catalog::IconRef;
use crate::app::domain::swatch::{Gradient, Hue, Swatch};
use crate::app::services::palette::{EffectiveStyle, Ink};

pub fn swatch_color(swatch: Swatch) -> Color {
    let (r, g, b) = swatch.rgb();
    Color::from_rgb(r, g, b)
}

pub fn ink_color(ink: Ink) -> Color {
    let (r, g, b) = ink.rgb();
    Color::from_rgb(r, g, b)
}

/// Page background behind the ordering screen.
pub fn page_bg() -> Color {
    Color::from_rgb(250, 250, 250)
}

/// Dark backdrop used by the start screen, the cart and the checkout panels.
pub fn backdrop_bg() -> Color {
    swatch_color(Swatch::of(Hue::Gray, 800))
}

/// Accent used by the action buttons (start, finalize, pay).
pub fn accent() -> Color {
    swatch_color(Swatch::of(Hue::Orange, 500))
}

pub fn danger() -> Color {
    swatch_color(Swatch::of(Hue::Red, 400))
}

/// Left-to-right gradient, one column at a time.
pub fn draw_gradient(x: i32, y: i32, w: i32, h: i32, gradient: &Gradient) {
    if gradient.is_solid() || w <= 1 {
        draw::set_draw_color(swatch_color(gradient.from));
        draw::draw_rectf(x, y, w, h);
        return;
    }

    let (r1, g1, b1) = gradient.from.rgb();
    let (r2, g2, b2) = gradient.to.rgb();
    let lerp = |a: u8, b: u8, t: f32| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    let span = (w - 1) as f32;

    for i in 0..w {
        let t = i as f32 / span;
        draw::set_draw_color(Color::from_rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t)));
        draw::draw_line(x + i, y, x + i, y + h - 1);
    }
}

/// Fill a box with an effective style and return the label color to use on it.
/// `base_text` is used for gradients, which carry no text color of their own.
pub fn paint_style(x: i32, y: i32, w: i32, h: i32, style: &EffectiveStyle, base_text: Color) -> Color {
    match style {
        EffectiveStyle::Base(gradient) => {
            draw_gradient(x, y, w, h, gradient);
            base_text
        }
        EffectiveStyle::Alternate(alt) => {
            draw::set_draw_color(swatch_color(alt.background()));
            draw::draw_rectf(x, y, w, h);

            let border = alt.border();
            draw::set_draw_color(ink_color(border.ink));
            for i in 0..border.width as i32 {
                draw::draw_rect(x + i, y + i, w - 2 * i, h - 2 * i);
            }
            ink_color(alt.text())
        }
    }
}

/// Glyph shown next to a label. Unknown icons draw nothing.
pub fn icon_glyph(icon: &IconRef) -> &'static str {
    match icon.0.as_str() {
        "hamburger" => "\u{1f354}",
        "glass-water" => "\u{1f964}",
        "salad" => "\u{1f957}",
        "leaf" => "\u{1f33f}",
        "flame" => "\u{1f336}",
        "sandwich" => "\u{1f96a}",
        "coffee" => "\u{2615}",
        "pizza" => "\u{1f355}",
        _ => "",
    }
}
