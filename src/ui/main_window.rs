use fltk::{
    app::Sender,
    enums::{Font, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::order::ScreenPhase;
use crate::app::state::{KioskState, Screen};

use super::accessibility_bar::{AccessibilityBar, BAR_HEIGHT};
use super::cart_panel::{CART_PANEL_HEIGHT, CartPanel};
use super::category_tabs::{CategoryTabs, TABS_HEIGHT};
use super::checkout::Checkout;
use super::item_list::ItemList;
use super::start_screen::StartScreen;
use super::theme::{accent, page_bg};

const WINDOW_WIDTH: i32 = 1024;
const WINDOW_HEIGHT: i32 = 900;
const TITLE_HEIGHT: i32 = 64;

pub struct MainWidgets {
    pub wind: Window,
    pub start: StartScreen,
    pub ordering: Flex,
    pub toggles: AccessibilityBar,
    pub tabs: CategoryTabs,
    pub items: ItemList,
    pub cart: CartPanel,
    pub checkout: Checkout,
}

pub fn build_main_window(fullscreen: bool, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 50, WINDOW_WIDTH, WINDOW_HEIGHT, "inclusiveEats");
    wind.set_xclass("inclusiveEats");
    wind.set_color(page_bg());

    let start = StartScreen::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, sender);

    let mut ordering = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None).column();
    ordering.set_frame(FrameType::FlatBox);
    ordering.set_color(page_bg());
    ordering.set_margin(24);
    ordering.set_pad(12);

    let mut title = Frame::default().with_label("inclusiveEats - Faça seu Pedido");
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(40);
    title.set_label_color(accent());
    ordering.fixed(&title, TITLE_HEIGHT);

    let toggles = AccessibilityBar::new(sender);
    ordering.fixed(&toggles.flex, BAR_HEIGHT);

    let tabs = CategoryTabs::new(0, 0, WINDOW_WIDTH, *sender);
    ordering.fixed(&tabs.widget, TABS_HEIGHT);

    let items = ItemList::new(*sender);

    let cart = CartPanel::new(sender);
    ordering.fixed(&cart.flex, CART_PANEL_HEIGHT);

    ordering.end();
    ordering.hide();

    let checkout = Checkout::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, sender);

    wind.end();
    if fullscreen {
        wind.fullscreen(true);
    }

    MainWidgets {
        wind,
        start,
        ordering,
        toggles,
        tabs,
        items,
        cart,
        checkout,
    }
}

impl MainWidgets {
    /// Bring every widget in line with the kiosk state. Called after each handled message.
    pub fn render(&mut self, kiosk: &KioskState, sender: &Sender<Message>) {
        match kiosk.screen() {
            Screen::Start => {
                self.ordering.hide();
                self.checkout.hide();
                self.start.group.show();
            }
            Screen::Ordering => {
                self.start.group.hide();
                match kiosk.phase() {
                    ScreenPhase::Payment => {
                        self.ordering.hide();
                        self.checkout.show_payment(kiosk.total());
                    }
                    ScreenPhase::Confirmation => {
                        self.ordering.hide();
                        self.checkout.show_confirmation(kiosk.order_number());
                    }
                    _ => {
                        self.checkout.hide();
                        self.ordering.show();
                    }
                }
            }
        }

        self.toggles.update(kiosk.flags());
        self.tabs.rebuild(kiosk);
        self.items.rebuild(kiosk);
        self.cart.rebuild(kiosk, sender);
        self.wind.redraw();
    }
}
