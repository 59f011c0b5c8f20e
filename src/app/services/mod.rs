//! Services layer - pure operations shared by controllers and the UI.
//!
//! This module contains:
//! - Palette projection for the color-vision mode
//! - Narration channel
//! - Locale phrases

pub mod narration;
pub mod palette;
pub mod phrases;
