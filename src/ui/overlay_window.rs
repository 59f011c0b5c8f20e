use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::controllers::overlay::OverlayPort;
use crate::app::domain::messages::Message;
use crate::app::domain::swatch::{Hue, Swatch};
use crate::app::infrastructure::widget_loader::spawn_widget_check;

use super::theme::swatch_color;

const OVERLAY_WIDTH: i32 = 220;
const OVERLAY_HEIGHT: i32 = 96;
const SCREEN_MARGIN: i32 = 16;

struct Mounted {
    window: Window,
    status: Frame,
    access: Button,
}

/// Sign-language host: a small borderless window pinned to the bottom-left
/// corner of the screen.
pub struct FltkOverlay {
    sender: Sender<Message>,
    mounted: Option<Mounted>,
}

impl FltkOverlay {
    pub fn new(sender: Sender<Message>) -> Self {
        Self { sender, mounted: None }
    }
}

impl OverlayPort for FltkOverlay {
    fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    fn mount(&mut self) {
        let (_, screen_h) = app::screen_size();
        let y = screen_h as i32 - OVERLAY_HEIGHT - SCREEN_MARGIN;

        let mut window = Window::new(SCREEN_MARGIN, y, OVERLAY_WIDTH, OVERLAY_HEIGHT, "VLibras");
        window.set_border(false);
        window.set_color(swatch_color(Swatch::of(Hue::Blue, 700)));

        let mut col = Flex::new(0, 0, OVERLAY_WIDTH, OVERLAY_HEIGHT, None).column();
        col.set_margin(8);
        col.set_pad(6);

        let mut status = Frame::default().with_label("Carregando VLibras...");
        status.set_label_color(Color::White);
        status.set_label_size(14);
        status.set_align(Align::Center | Align::Inside | Align::Wrap);

        let mut access = Button::default().with_label("\u{270b} Acessar VLibras");
        access.set_frame(FrameType::FlatBox);
        access.set_color(Color::White);
        access.set_label_color(swatch_color(Swatch::of(Hue::Blue, 700)));
        access.set_label_size(16);
        access.deactivate();
        col.fixed(&access, 40);

        col.end();
        window.end();
        window.show();

        self.mounted = Some(Mounted { window, status, access });
    }

    fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            let mut window = mounted.window;
            window.hide();
            Window::delete(window);
        }
    }

    fn load_widget(&mut self, script_url: &str) {
        let sender = self.sender;
        spawn_widget_check(script_url.to_string(), move |result| {
            sender.send(Message::OverlayWidgetLoaded(result.map_err(|e| e.to_string())));
            app::awake();
        });
    }

    fn init_widget(&mut self, app_url: &str) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };
        mounted.status.set_label("Tradução em Libras");
        let url = app_url.to_string();
        mounted.access.set_callback(move |_| {
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open {}: {}", url, e);
            }
        });
        mounted.access.activate();
        mounted.window.redraw();
    }
}
