//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Catalog, menu items and prices
//! - Cart, screen phases and order numbers
//! - Theme swatches and gradients
//! - Settings, accessibility flags and the message type for the event system

pub mod catalog;
pub mod messages;
pub mod order;
pub mod settings;
pub mod swatch;

pub use catalog::{Catalog, Category, CategoryId, IconRef, MenuItem, Price};
pub use messages::Message;
pub use order::{Cart, CartLine, OrderNumber, PaymentMethod, ScreenPhase};
pub use settings::{AccessibilityFlags, KioskSettings};
pub use swatch::{Gradient, Hue, Swatch};
