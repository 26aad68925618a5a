//! Browser shell for SortDrop sorting exercises.
//!
//! On `wasm32` this crate exports [`SortingWidget`] to JavaScript. The DOM
//! styling rules in [`style`] compile on every target.

pub mod style;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use web::start;
#[cfg(target_arch = "wasm32")]
pub use widget::SortingWidget;
