//! Helpers shared by the deck model and the package writer.

pub mod unit;
pub mod xml;

pub use unit::{Emu, FontSize};
