//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält das konfigurierbare Farbschema, das sowohl Kartenoberfläche als
//! auch CLI nutzen.

pub mod theme;

pub use theme::{color_to_hex, ThemeOptions};
