//! fruit-posts - Client-side navigation for the fruit-posts SPA
//!
//! A small single-page app about fruit posts: a home listing, a
//! create-a-post form, an about page, and a per-fruit detail page. This
//! crate owns the navigation layer: a declarative route table compiled
//! into a [`Router`] that matches URLs against path patterns, extracts
//! path parameters, and drives history-based (clean URL) navigation.
//!
//! ## Architecture
//!
//! - [`router`]: path patterns, route table, history integration
//! - [`component`]: the [`View`] render tree views are built from
//! - [`reactive`]: [`Signal`], the observable cells the router exposes
//! - [`views`]: the four page views plus the not-found fallback
//! - [`routes`]: the route table builder wiring it all together
//!
//! ## Example
//!
//! ```
//! use fruit_posts::routes;
//!
//! let router = routes::build("/");
//! let matched = router.match_path("/fruit/apple").unwrap();
//! assert_eq!(matched.route.name(), Some("fruit"));
//! assert_eq!(matched.params.get("id").map(String::as_str), Some("apple"));
//! ```
//!
//! The router is an explicitly constructed value, not a process-wide
//! singleton: every call to [`routes::build`] yields an isolated instance
//! with its own base URL and session history.

#![warn(missing_docs)]

pub mod component;
pub mod logging;
pub mod reactive;
pub mod router;
pub mod routes;
pub mod views;

pub use component::{Component, ElementView, MountError, View};
pub use reactive::Signal;
pub use router::{
	HistoryState, Link, Path, PathError, PathPattern, ReverseError, Route, RouteMatch, Router,
	RouterError, RouterOutlet,
};

// Logging macros are exported at the crate root via #[macro_export]:
// info_log!, warn_log!, error_log!.
