//! Popup overlays.
//!
//! - [`transfer`] - Send Money form
//! - [`help`] - Keybinding reference

pub mod help;
pub mod transfer;
