pub mod app;
#[cfg(feature = "gui")]
pub mod ui;
