use fltk::{
    app::Sender,
    button::Button,
    enums::{Color, FrameType},
    group::Flex,
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::AccessibilityFlags;
use crate::app::domain::swatch::{Hue, Swatch};

use super::theme::swatch_color;

pub const BAR_HEIGHT: i32 = 50;

fn on_off(flag: bool) -> &'static str {
    if flag { "On" } else { "Off" }
}

/// The three accessibility toggles. Labels show the current state.
pub struct AccessibilityBar {
    pub flex: Flex,
    voice: Button,
    color_vision: Button,
    sign_language: Button,
}

impl AccessibilityBar {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut flex = Flex::default().row();
        flex.set_pad(16);

        let toggle = |message: Message| {
            let mut button = Button::default();
            button.set_frame(FrameType::FlatBox);
            button.set_color(swatch_color(Swatch::of(Hue::Red, 500)));
            button.set_selection_color(swatch_color(Swatch::of(Hue::Orange, 600)));
            button.set_label_color(Color::White);
            button.set_label_size(18);
            let s = *sender;
            button.set_callback(move |_| s.send(message.clone()));
            button
        };

        let voice = toggle(Message::ToggleVoice);
        let color_vision = toggle(Message::ToggleColorVision);
        let sign_language = toggle(Message::ToggleSignLanguage);
        flex.end();

        Self {
            flex,
            voice,
            color_vision,
            sign_language,
        }
    }

    pub fn update(&mut self, flags: AccessibilityFlags) {
        self.voice
            .set_label(&format!("\u{1f3a4} Ativar/Desativar Voz ({})", on_off(flags.voice_enabled)));
        self.color_vision
            .set_label(&format!("\u{1f3a8} Modo Dicromacia ({})", on_off(flags.color_vision_mode)));
        self.sign_language
            .set_label(&format!("\u{270b} VLibras ({})", on_off(flags.sign_language_overlay)));
        self.flex.redraw();
    }
}
