//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Catalog, Cart, Settings, Messages)
//! - `controllers/` - Orchestration (OrderController, SignLanguageOverlay)
//! - `services/` - Pure operations (palette, narration, phrases)
//! - `infrastructure/` - External integrations (speech process, widget fetch, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::order::{OrderController, OrderEvent};
pub use controllers::overlay::{OverlayPort, SignLanguageOverlay, WidgetState};
pub use domain::{
    AccessibilityFlags, Cart, CartLine, Catalog, CategoryId, KioskSettings, MenuItem, Message,
    OrderNumber, PaymentMethod, Price, ScreenPhase,
};
pub use infrastructure::error::{KioskError, Result};
pub use services::narration::{NarrationPort, Narrator, SilentNarration};
pub use services::palette::{EffectiveStyle, PaletteMode, Role, project};
pub use state::{KioskState, Screen};
