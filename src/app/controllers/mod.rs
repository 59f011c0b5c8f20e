//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that own mutable state and expose
//! transitions over it:
//! - Order state machine
//! - Sign-language overlay lifecycle

pub mod order;
pub mod overlay;
