use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::{Flex, Group},
    prelude::*,
};

use crate::app::domain::messages::Message;

use super::theme::{accent, backdrop_bg};

pub struct StartScreen {
    pub group: Group,
}

impl StartScreen {
    pub fn new(x: i32, y: i32, w: i32, h: i32, sender: &Sender<Message>) -> Self {
        let mut group = Group::new(x, y, w, h, None);
        group.set_frame(FrameType::FlatBox);
        group.set_color(backdrop_bg());

        let (cw, ch) = (640, 360);
        let mut col = Flex::new(x + (w - cw) / 2, y + (h - ch) / 2, cw, ch, None).column();
        col.set_pad(24);

        let mut title = Frame::default().with_label("Bem-vindo ao inclusiveEats");
        title.set_label_color(Color::White);
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(44);
        col.fixed(&title, 90);

        let mut subtitle = Frame::default().with_label("Toque no botão abaixo para iniciar seu pedido.");
        subtitle.set_label_color(Color::White);
        subtitle.set_label_size(22);
        subtitle.set_align(Align::Center | Align::Inside | Align::Wrap);

        let mut start = Button::default().with_label("\u{25b6} Iniciar Pedido");
        start.set_frame(FrameType::FlatBox);
        start.set_color(accent());
        start.set_label_color(Color::White);
        start.set_label_font(Font::HelveticaBold);
        start.set_label_size(28);
        start.set_callback({
            let s = *sender;
            move |_| s.send(Message::StartOrder)
        });
        col.fixed(&start, 80);

        col.end();
        group.end();

        Self { group }
    }
}
