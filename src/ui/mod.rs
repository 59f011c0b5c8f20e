//! FLTK front-end. Widgets only report interactions as [`Message`]s and
//! redraw from `KioskState` in `MainWidgets::render`.
//!
//! [`Message`]: crate::app::Message

pub mod accessibility_bar;
pub mod cart_panel;
pub mod category_tabs;
pub mod checkout;
pub mod item_list;
pub mod main_window;
pub mod overlay_window;
pub mod start_screen;
pub mod theme;
