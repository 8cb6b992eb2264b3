//! Component system for fruit-posts views.
//!
//! Views are plain values built from a small render tree: [`View`] is the
//! unified representation of renderable content, [`ElementView`] the
//! builder for DOM elements, and [`Component`] the trait for reusable
//! units. Views render to an HTML string everywhere and can be mounted
//! into the document on WASM targets.
//!
//! The router treats views as opaque factories (`Fn() -> View`), so
//! nothing in this module knows about routing.

mod into_view;
mod r#trait;

pub use into_view::{ElementView, IntoView, MountError, View};
pub use r#trait::Component;
