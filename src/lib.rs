//! seven-pillars: a short terminal journey through the seven pillars of self.

pub mod content;
pub mod tui;
pub mod types;
