use fltk::{app, prelude::*};
use tracing_subscriber::EnvFilter;

use inclusive_eats::app::infrastructure::speech::CommandSpeech;
use inclusive_eats::app::{Catalog, KioskSettings, KioskState, Message, NarrationPort, SilentNarration};
use inclusive_eats::ui::main_window::build_main_window;
use inclusive_eats::ui::overlay_window::FltkOverlay;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = KioskSettings::load();
    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::load(path),
        None => Catalog::load_default(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Cannot load the menu: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        categories = catalog.categories().len(),
        items = catalog.items().len(),
        "Menu loaded"
    );

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(settings.fullscreen, &sender);

    // An empty program name turns speech off entirely
    let speech: Box<dyn NarrationPort> = if settings.speech_program.trim().is_empty() {
        Box::new(SilentNarration)
    } else {
        Box::new(CommandSpeech::new(settings.speech_program.clone()))
    };
    let overlay = FltkOverlay::new(sender);
    let mut kiosk = KioskState::new(catalog, &settings, speech, Box::new(overlay));

    widgets.render(&kiosk, &sender);
    widgets.wind.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            kiosk.handle(msg);
            widgets.render(&kiosk, &sender);
        }
    }
}
