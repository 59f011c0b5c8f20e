//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Speech synthesizer process
//! - Sign-language widget download
//! - Error types

pub mod error;
pub mod speech;
pub mod widget_loader;
