use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::{Flex, Pack, Scroll},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::services::phrases;
use crate::app::state::KioskState;

use super::theme::{accent, backdrop_bg, danger};

pub const CART_PANEL_HEIGHT: i32 = 260;

const HEADER_HEIGHT: i32 = 40;
const LINE_HEIGHT: i32 = 34;
const TOTAL_HEIGHT: i32 = 40;
const FINALIZE_HEIGHT: i32 = 50;
const REMOVE_WIDTH: i32 = 110;

pub struct CartPanel {
    pub flex: Flex,
    scroll: Scroll,
    lines: Pack,
    total: Frame,
}

impl CartPanel {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut flex = Flex::default().column();
        flex.set_frame(FrameType::FlatBox);
        flex.set_color(backdrop_bg());
        flex.set_margin(16);
        flex.set_pad(6);

        let mut header = Frame::default().with_label("\u{1f374} Carrinho");
        header.set_label_color(Color::White);
        header.set_label_font(Font::HelveticaBold);
        header.set_label_size(26);
        header.set_align(Align::Left | Align::Inside);
        flex.fixed(&header, HEADER_HEIGHT);

        let mut scroll = Scroll::default();
        scroll.set_frame(FrameType::NoBox);
        let mut lines = Pack::default_fill();
        lines.set_spacing(4);
        lines.end();
        scroll.end();

        let mut total = Frame::default();
        total.set_label_color(Color::White);
        total.set_label_font(Font::HelveticaBold);
        total.set_label_size(24);
        total.set_align(Align::Left | Align::Inside);
        flex.fixed(&total, TOTAL_HEIGHT);

        let mut finalize = Button::default().with_label("Finalizar Pedido");
        finalize.set_frame(FrameType::FlatBox);
        finalize.set_color(accent());
        finalize.set_label_color(Color::White);
        finalize.set_label_size(20);
        finalize.set_callback({
            let s = *sender;
            move |_| s.send(Message::ProceedToPayment)
        });
        flex.fixed(&finalize, FINALIZE_HEIGHT);

        flex.end();

        Self {
            flex,
            scroll,
            lines,
            total,
        }
    }

    /// Recreate the cart rows. Each row carries its own remove button,
    /// bound to the row's index at the time of the rebuild.
    pub fn rebuild(&mut self, kiosk: &KioskState, sender: &Sender<Message>) {
        self.lines.clear();
        self.lines.resize(self.scroll.x(), self.scroll.y(), self.scroll.w(), 0);
        self.lines.begin();

        let cart = kiosk.cart();
        if cart.is_empty() {
            let mut empty = Frame::default().with_size(0, LINE_HEIGHT).with_label("Nenhum item no carrinho.");
            empty.set_label_color(Color::White);
            empty.set_label_size(18);
            empty.set_align(Align::Left | Align::Inside);
        }

        for (index, line) in cart.lines().iter().enumerate() {
            let mut row = Flex::default().with_size(0, LINE_HEIGHT).row();

            let mut label = Frame::default()
                .with_label(&format!("{} - {}", line.name(), phrases::money(line.unit_price())));
            label.set_label_color(Color::White);
            label.set_label_size(18);
            label.set_align(Align::Left | Align::Inside | Align::Clip);

            let mut remove = Button::default().with_label("Remover");
            remove.set_frame(FrameType::FlatBox);
            remove.set_color(backdrop_bg());
            remove.set_label_color(danger());
            remove.set_label_size(16);
            remove.set_tooltip(&format!("Remover {} do carrinho", line.name()));
            remove.set_callback({
                let s = *sender;
                move |_| s.send(Message::RemoveLine(index))
            });
            row.fixed(&remove, REMOVE_WIDTH);

            row.end();
        }

        self.lines.end();
        self.total
            .set_label(&format!("Total: {}", phrases::money(kiosk.total())));
        self.flex.redraw();
    }
}
