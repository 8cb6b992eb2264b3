//! Client-side routing.
//!
//! The router maps URL path patterns to view factories and mediates
//! navigation: matching the current URL against the route table,
//! extracting the `:id` path parameter, generating URLs from route names,
//! and keeping the browser history in sync so back/forward work without
//! full page reloads.
//!
//! Matching is a pure, synchronous computation over the immutable route
//! table; the only state is "which route (if any) matches the active
//! URL", recomputed on every navigation event.

mod components;
mod core;
mod error;
mod handler;
mod history;
mod params;
mod pattern;

pub use components::{Link, RouterOutlet};
pub use core::{Route, RouteMatch, Router};
pub use error::{PathError, RouterError};
pub use handler::RouteHandler;
pub use history::{HistoryState, NavigationType, SessionHistory};
pub use params::{FromPath, ParamContext, Path};
pub use pattern::{PathPattern, ReverseError};
