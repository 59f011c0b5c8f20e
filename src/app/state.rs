use super::controllers::order::{OrderController, OrderEvent};
use super::controllers::overlay::{OverlayPort, SignLanguageOverlay};
use super::domain::catalog::{Catalog, CategoryId, MenuItem, Price};
use super::domain::messages::Message;
use super::domain::order::{Cart, OrderNumber, PaymentMethod, ScreenPhase};
use super::domain::settings::{AccessibilityFlags, DEFAULT_LOCALE, KioskSettings};
use super::infrastructure::error::{KioskError, Result};
use super::services::narration::{NarrationPort, Narrator};
use super::services::palette::{
    ACTIVE_TAB_THEME, EffectiveStyle, INACTIVE_TAB_THEME, PaletteMode, Role, project,
};
use super::services::phrases;

/// Top-level screen switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Ordering,
}

/// The whole kiosk: order state, accessibility flags and the ports that
/// reach the outside world. One instance per kiosk; nothing is global.
pub struct KioskState {
    catalog: Catalog,
    order: OrderController,
    narrator: Narrator,
    overlay: SignLanguageOverlay,
    flags: AccessibilityFlags,
}

impl KioskState {
    pub fn new(
        catalog: Catalog,
        settings: &KioskSettings,
        narration: Box<dyn NarrationPort>,
        overlay_port: Box<dyn OverlayPort>,
    ) -> Self {
        let order = OrderController::new(catalog.default_category().id.clone());
        Self::build(catalog, settings, narration, overlay_port, order)
    }

    /// Same as [`KioskState::new`] with a seeded order-number generator.
    pub fn with_seed(
        catalog: Catalog,
        settings: &KioskSettings,
        narration: Box<dyn NarrationPort>,
        overlay_port: Box<dyn OverlayPort>,
        seed: u64,
    ) -> Self {
        let order = OrderController::with_seed(catalog.default_category().id.clone(), seed);
        Self::build(catalog, settings, narration, overlay_port, order)
    }

    fn build(
        catalog: Catalog,
        settings: &KioskSettings,
        narration: Box<dyn NarrationPort>,
        overlay_port: Box<dyn OverlayPort>,
        order: OrderController,
    ) -> Self {
        let flags = AccessibilityFlags::from(settings);
        let narrator = Narrator::new(narration, DEFAULT_LOCALE, flags.voice_enabled);
        let mut overlay = SignLanguageOverlay::new(
            overlay_port,
            settings.overlay_script_url.clone(),
            settings.overlay_app_url.clone(),
        );
        if flags.sign_language_overlay {
            overlay.enable();
        }

        Self {
            catalog,
            order,
            narrator,
            overlay,
            flags,
        }
    }

    /// Dispatch one user interaction. Failures are narrated or logged here
    /// and never reach the event loop.
    pub fn handle(&mut self, msg: Message) {
        let result = match msg {
            Message::StartOrder => self.start_order(),
            Message::ToggleVoice => {
                self.toggle_voice();
                Ok(())
            }
            Message::ToggleColorVision => {
                self.toggle_color_vision();
                Ok(())
            }
            Message::ToggleSignLanguage => {
                self.toggle_sign_language();
                Ok(())
            }
            Message::SelectCategory(id) => self.select_category(id),
            Message::HoverCategory(id) => self.hover_category(&id),
            Message::AddItem(id) => self.add_item(&id),
            Message::HoverItem(id) => self.hover_item(&id),
            Message::RemoveLine(index) => self.remove_line(index),
            Message::ProceedToPayment => self.proceed_to_payment(),
            Message::Pay(method) => self.pay(method),
            Message::CancelPayment => self.cancel_payment(),
            Message::ReturnToMenu => self.return_to_menu(),
            Message::OverlayWidgetLoaded(result) => self.overlay_widget_loaded(result),
        };

        match result {
            Ok(()) => {}
            // Already narrated / already logged by the overlay
            Err(KioskError::EmptyCart) | Err(KioskError::OverlayLoadFailure(_)) => {}
            Err(e) => tracing::warn!("Ignoring interaction: {}", e),
        }
    }

    fn narrate(&mut self, event: &OrderEvent) {
        let text = phrases::describe(event, &self.catalog);
        self.narrator.announce(&text);
    }

    // --- Order flow ---

    pub fn start_order(&mut self) -> Result<()> {
        let event = self.order.begin()?;
        self.narrate(&event);
        Ok(())
    }

    pub fn select_category(&mut self, id: CategoryId) -> Result<()> {
        if self.catalog.category(&id).is_none() {
            return Err(KioskError::UnknownCategory(id.0));
        }
        let event = self.order.select_category(id)?;
        self.narrate(&event);
        Ok(())
    }

    pub fn add_item(&mut self, item_id: &str) -> Result<()> {
        let item = self
            .catalog
            .item(item_id)
            .ok_or_else(|| KioskError::UnknownItem(item_id.to_string()))?;
        let event = self.order.add_item(item)?;
        self.narrate(&event);
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> Result<()> {
        let event = self.order.remove_item(index)?;
        self.narrate(&event);
        Ok(())
    }

    pub fn proceed_to_payment(&mut self) -> Result<()> {
        match self.order.proceed_to_payment() {
            Ok(event) => {
                self.narrate(&event);
                Ok(())
            }
            Err(KioskError::EmptyCart) => {
                self.narrator.announce(phrases::EMPTY_CART);
                Err(KioskError::EmptyCart)
            }
            Err(e) => Err(e),
        }
    }

    pub fn pay(&mut self, method: PaymentMethod) -> Result<()> {
        let total = self.order.total();
        let event = self.order.confirm_payment(method)?;
        if let OrderEvent::PaymentConfirmed { order_number, .. } = &event {
            tracing::info!(order = %order_number, total = %total, ?method, "Order confirmed");
        }
        self.narrate(&event);
        Ok(())
    }

    pub fn cancel_payment(&mut self) -> Result<()> {
        let event = self.order.cancel_payment()?;
        self.narrate(&event);
        Ok(())
    }

    pub fn return_to_menu(&mut self) -> Result<()> {
        let event = self.order.return_to_menu()?;
        self.narrate(&event);
        Ok(())
    }

    // --- Hover narration ---

    pub fn hover_category(&mut self, id: &CategoryId) -> Result<()> {
        let category = self
            .catalog
            .category(id)
            .ok_or_else(|| KioskError::UnknownCategory(id.0.clone()))?;
        self.narrator.announce(&category.label);
        Ok(())
    }

    pub fn hover_item(&mut self, item_id: &str) -> Result<()> {
        let item = self
            .catalog
            .item(item_id)
            .ok_or_else(|| KioskError::UnknownItem(item_id.to_string()))?;
        let text = phrases::item_hover(item);
        self.narrator.announce(&text);
        Ok(())
    }

    // --- Accessibility ---

    pub fn toggle_voice(&mut self) {
        self.flags.voice_enabled = !self.flags.voice_enabled;
        let enabled = self.flags.voice_enabled;
        self.narrator.set_enabled(enabled, phrases::voice_toggled(enabled));
    }

    pub fn toggle_color_vision(&mut self) {
        self.flags.color_vision_mode = !self.flags.color_vision_mode;
        self.narrator
            .announce(phrases::color_vision_toggled(self.flags.color_vision_mode));
    }

    pub fn toggle_sign_language(&mut self) {
        self.flags.sign_language_overlay = !self.flags.sign_language_overlay;
        if self.flags.sign_language_overlay {
            self.overlay.enable();
        } else {
            self.overlay.disable();
        }
        self.narrator
            .announce(phrases::sign_language_toggled(self.flags.sign_language_overlay));
    }

    pub fn overlay_widget_loaded(&mut self, result: std::result::Result<(), String>) -> Result<()> {
        let outcome = self
            .overlay
            .widget_load_finished(result.map_err(KioskError::OverlayLoadFailure));
        if outcome.is_err() {
            self.flags.sign_language_overlay = false;
        }
        outcome
    }

    // --- View ---

    pub fn screen(&self) -> Screen {
        match self.order.phase() {
            ScreenPhase::Start => Screen::Start,
            _ => Screen::Ordering,
        }
    }

    pub fn phase(&self) -> ScreenPhase {
        self.order.phase()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        self.order.cart()
    }

    pub fn total(&self) -> Price {
        self.order.total()
    }

    pub fn active_category(&self) -> &CategoryId {
        self.order.active_category()
    }

    pub fn order_number(&self) -> Option<OrderNumber> {
        self.order.order_number()
    }

    pub fn flags(&self) -> AccessibilityFlags {
        self.flags
    }

    pub fn palette_mode(&self) -> PaletteMode {
        PaletteMode::from_flag(self.flags.color_vision_mode)
    }

    pub fn tab_style(&self, id: &CategoryId) -> EffectiveStyle {
        if id == self.order.active_category() {
            project(&ACTIVE_TAB_THEME, self.palette_mode(), Role::Tab(id))
        } else {
            EffectiveStyle::Base(INACTIVE_TAB_THEME)
        }
    }

    pub fn item_style(&self, item: &MenuItem) -> EffectiveStyle {
        project(&item.visual_theme, self.palette_mode(), Role::Item)
    }

    /// Text of the most recent announcement that reached the synthesizer.
    pub fn last_announcement(&self) -> Option<&str> {
        self.narrator.current()
    }
}
