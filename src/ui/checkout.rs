use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::{Flex, Group},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::order::{OrderNumber, PaymentMethod};
use crate::app::domain::catalog::Price;
use crate::app::domain::swatch::{Hue, Swatch};
use crate::app::services::phrases;

use super::theme::{accent, backdrop_bg, swatch_color};

const CARD_WIDTH: i32 = 460;
const CARD_HEIGHT: i32 = 380;
const BUTTON_HEIGHT: i32 = 60;

fn action_button(label: &str, color: Color, message: Message, sender: &Sender<Message>) -> Button {
    let mut button = Button::default().with_label(label);
    button.set_frame(FrameType::FlatBox);
    button.set_color(color);
    button.set_label_color(Color::White);
    button.set_label_size(20);
    let s = *sender;
    button.set_callback(move |_| s.send(message.clone()));
    button
}

fn heading(label: &str, size: i32) -> Frame {
    let mut frame = Frame::default().with_label(label);
    frame.set_label_color(swatch_color(Swatch::of(Hue::Gray, 800)));
    frame.set_label_font(Font::HelveticaBold);
    frame.set_label_size(size);
    frame.set_align(Align::Center | Align::Inside | Align::Wrap);
    frame
}

/// White card centered on a dark backdrop.
fn card(backdrop: &Group) -> Flex {
    let x = backdrop.x() + (backdrop.w() - CARD_WIDTH) / 2;
    let y = backdrop.y() + (backdrop.h() - CARD_HEIGHT) / 2;
    let mut card = Flex::new(x, y, CARD_WIDTH, CARD_HEIGHT, None).column();
    card.set_frame(FrameType::FlatBox);
    card.set_color(Color::White);
    card.set_margin(32);
    card.set_pad(14);
    card
}

/// Payment and confirmation screens. Both cover the ordering content while shown.
pub struct Checkout {
    payment: Group,
    payment_total: Frame,
    confirmation: Group,
    order_number: Frame,
}

impl Checkout {
    pub fn new(x: i32, y: i32, w: i32, h: i32, sender: &Sender<Message>) -> Self {
        let mut payment = Group::new(x, y, w, h, None);
        payment.set_frame(FrameType::FlatBox);
        payment.set_color(backdrop_bg());
        let mut pay_card = card(&payment);
        pay_card.fixed(&heading("Pagamento (Simulação)", 28), 50);
        let payment_total = heading("", 22);
        let cash = action_button(
            "Pagar com Dinheiro",
            accent(),
            Message::Pay(PaymentMethod::Cash),
            sender,
        );
        pay_card.fixed(&cash, BUTTON_HEIGHT);
        let card_btn = action_button(
            "Pagar com Cartão",
            accent(),
            Message::Pay(PaymentMethod::Card),
            sender,
        );
        pay_card.fixed(&card_btn, BUTTON_HEIGHT);
        let cancel = action_button(
            "Cancelar",
            swatch_color(Swatch::of(Hue::Red, 400)),
            Message::CancelPayment,
            sender,
        );
        pay_card.fixed(&cancel, BUTTON_HEIGHT);
        pay_card.end();
        payment.end();
        payment.hide();

        let mut confirmation = Group::new(x, y, w, h, None);
        confirmation.set_frame(FrameType::FlatBox);
        confirmation.set_color(backdrop_bg());
        let mut done_card = card(&confirmation);
        done_card.fixed(&heading("Pedido confirmado!", 30), 60);
        let order_number = heading("", 40);
        heading("Aguarde ser chamado.", 20);
        let back = action_button("Voltar ao Menu", accent(), Message::ReturnToMenu, sender);
        done_card.fixed(&back, BUTTON_HEIGHT);
        done_card.end();
        confirmation.end();
        confirmation.hide();

        Self {
            payment,
            payment_total,
            confirmation,
            order_number,
        }
    }

    pub fn show_payment(&mut self, total: Price) {
        self.payment_total
            .set_label(&format!("Total: {}", phrases::money(total)));
        self.confirmation.hide();
        self.payment.show();
    }

    pub fn show_confirmation(&mut self, order_number: Option<OrderNumber>) {
        let label = order_number.map(|n| n.to_string()).unwrap_or_default();
        self.order_number.set_label(&label);
        self.payment.hide();
        self.confirmation.show();
    }

    pub fn hide(&mut self) {
        self.payment.hide();
        self.confirmation.hide();
    }
}
