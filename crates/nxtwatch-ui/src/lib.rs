//! NxtWatch UI Components
//!
//! Dioxus building blocks shared by the NxtWatch pages.
//!
//! Components carry no theme state of their own: callers pass `dark`
//! where a component has light and dark variants, and colors come from the
//! global stylesheet's `.theme-dark` / `.theme-light` classes.

pub mod components;

pub use components::*;
