//! Reusable UI components.

mod button;
mod input;
mod loader;
mod status_panel;

pub use button::*;
pub use input::*;
pub use loader::*;
pub use status_panel::*;
