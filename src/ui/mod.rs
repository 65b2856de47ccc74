//! User Interface module
//!
//! Terminal UI using ratatui: one game screen plus a final-score popup.

pub mod app;

pub use app::App;
