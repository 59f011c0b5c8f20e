use super::catalog::CategoryId;
use super::order::PaymentMethod;

/// Every user interaction the front-end can report.
/// Widgets send one of these; the dispatch loop in main hands it to `KioskState::handle`.
#[derive(Debug, Clone)]
pub enum Message {
    // Start screen
    StartOrder,

    // Accessibility toggles
    ToggleVoice,
    ToggleColorVision,
    ToggleSignLanguage,

    // Menu
    SelectCategory(CategoryId),
    HoverCategory(CategoryId),
    AddItem(String),
    HoverItem(String),

    // Cart
    RemoveLine(usize),
    ProceedToPayment,

    // Payment
    Pay(PaymentMethod),
    CancelPayment,
    ReturnToMenu,

    // Background overlay load
    OverlayWidgetLoaded(Result<(), String>),
}
