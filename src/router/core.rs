//! Core Router implementation.
//!
//! This module provides the main Router struct and routing logic: an
//! ordered, immutable route table built once at startup, matched against
//! the active URL on every navigation event. First matching route in
//! table order wins, so static paths registered before a parameterized
//! one are never shadowed by it.

use super::error::RouterError;
use super::handler::{RouteHandler, no_params_handler, with_param_handler};
#[cfg(target_arch = "wasm32")]
use super::history::setup_popstate_listener;
use super::history::{HistoryState, NavigationType, SessionHistory};
use super::params::{FromPath, ParamContext, Path};
use super::pattern::{PathPattern, ReverseError};
use crate::component::View;
use crate::reactive::Signal;
use crate::{info_log, warn_log};
use std::collections::HashMap;
use std::sync::Arc;

/// A matched route with extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route.
	pub route: Route,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
	/// Parameter values in the order they appear in the pattern.
	pub(crate) param_values: Vec<String>,
}

impl RouteMatch {
	/// Renders the matched route's view with the extracted parameters.
	///
	/// # Errors
	///
	/// Returns [`RouterError::PathExtraction`] if the handler's typed
	/// parameter extraction fails.
	pub fn render(&self) -> Result<View, RouterError> {
		let ctx = ParamContext::new(self.params.clone(), self.param_values.clone());
		self.route.handler.handle(&ctx)
	}
}

/// A single route definition: a path pattern, a unique symbolic name,
/// and an opaque view factory.
pub struct Route {
	/// The path pattern.
	pattern: PathPattern,
	/// Optional route name for reverse lookups.
	name: Option<String>,
	/// The view factory.
	handler: Arc<dyn RouteHandler>,
}

impl Clone for Route {
	fn clone(&self) -> Self {
		Self {
			pattern: self.pattern.clone(),
			name: self.name.clone(),
			handler: Arc::clone(&self.handler),
		}
	}
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.finish()
	}
}

impl Route {
	/// Creates a new route.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid. Route tables are fixed
	/// configuration, so a bad pattern is a construction-time defect.
	/// Use [`PathPattern::new`] directly for fallible construction.
	pub fn new<F>(pattern: &str, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		Self {
			pattern: compile_pattern(pattern),
			name: None,
			handler: no_params_handler(component),
		}
	}

	/// Creates a named route.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid.
	pub fn named<F>(name: impl Into<String>, pattern: &str, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		Self {
			pattern: compile_pattern(pattern),
			name: Some(name.into()),
			handler: no_params_handler(component),
		}
	}

	/// Creates a named route whose view takes one typed path parameter.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid.
	pub fn named_with_param<F, T>(name: impl Into<String>, pattern: &str, handler: F) -> Self
	where
		F: Fn(Path<T>) -> View + Send + Sync + 'static,
		T: FromPath + 'static,
	{
		Self {
			pattern: compile_pattern(pattern),
			name: Some(name.into()),
			handler: with_param_handler(handler),
		}
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}
}

fn compile_pattern(pattern: &str) -> PathPattern {
	PathPattern::new(pattern)
		.unwrap_or_else(|e| panic!("invalid route pattern '{}': {}", pattern, e))
}

/// The main client-side router.
///
/// Holds the ordered route table, the base URL the app is served under,
/// and the reactive signals describing the currently matched route. A
/// `Router` is an explicitly constructed value: build one per page
/// session (or per test) instead of sharing a global.
pub struct Router {
	/// Base URL prefix, normalized to "" or "/prefix" (no trailing slash).
	base_url: String,
	/// Registered routes, in match order.
	routes: Vec<Route>,
	/// Named routes for reverse lookups.
	named_routes: HashMap<String, usize>,
	/// The page session's navigation history.
	history: SessionHistory,
	/// Current path signal (relative to the base URL).
	current_path: Signal<String>,
	/// Current params signal.
	current_params: Signal<HashMap<String, String>>,
	/// Current matched route name signal.
	current_route_name: Signal<Option<String>>,
	/// Not found fallback view factory.
	not_found: Option<Arc<dyn Fn() -> View + Send + Sync>>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("base_url", &self.base_url)
			.field("routes_count", &self.routes.len())
			.field(
				"named_routes",
				&self.named_routes.keys().collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl Router {
	/// Creates a new router rooted at the given base URL.
	///
	/// The base URL is the prefix the hosting environment serves the app
	/// under; `"/"` or `""` mean the domain root. The initial path is
	/// read from the session history (the browser location on wasm).
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url = normalize_base_url(base_url.into());
		let history = SessionHistory::new();

		let initial_path = history
			.current_path()
			.and_then(|full| strip_base(&base_url, &full))
			.unwrap_or_else(|| "/".to_string());

		Self {
			base_url,
			routes: Vec::new(),
			named_routes: HashMap::new(),
			history,
			current_path: Signal::new(initial_path),
			current_params: Signal::new(HashMap::new()),
			current_route_name: Signal::new(None),
			not_found: None,
		}
	}

	/// Adds a route to the router.
	pub fn route<F>(self, pattern: &str, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		self.add(Route::new(pattern, component))
	}

	/// Adds a named route to the router.
	pub fn named_route<F>(self, name: &str, pattern: &str, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		self.add(Route::named(name, pattern, component))
	}

	/// Adds a named route whose view takes one typed path parameter.
	pub fn named_route_param<F, T>(self, name: &str, pattern: &str, handler: F) -> Self
	where
		F: Fn(Path<T>) -> View + Send + Sync + 'static,
		T: FromPath + 'static,
	{
		self.add(Route::named_with_param(name, pattern, handler))
	}

	/// Adds a prebuilt route definition.
	///
	/// # Panics
	///
	/// Panics if the route's name or pattern collides with an existing
	/// entry. Duplicates are a configuration defect with no production
	/// fallback, so they fail loudly at construction time.
	pub fn add(mut self, route: Route) -> Self {
		if let Some(name) = route.name() {
			if self.named_routes.contains_key(name) {
				panic!("duplicate route name '{}'", name);
			}
		}
		if let Some(existing) = self
			.routes
			.iter()
			.find(|r| r.pattern().pattern() == route.pattern().pattern())
		{
			panic!(
				"duplicate route pattern '{}' (already bound to {:?})",
				route.pattern().pattern(),
				existing.name()
			);
		}

		if let Some(name) = route.name() {
			self.named_routes.insert(name.to_string(), self.routes.len());
		}
		self.routes.push(route);
		// Initial load is a navigation event too: keep the signals in
		// step with the table as it grows, so a freshly built router
		// already reflects the starting URL's match.
		self.sync_current();
		self
	}

	/// Sets the not-found fallback view.
	///
	/// The fallback is rendered when no route matches; it is not a route
	/// itself, so [`Router::match_path`] still reports no active route
	/// for unmatched URLs.
	pub fn not_found<F>(mut self, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(component));
		self
	}

	/// Returns the normalized base URL ("" for the domain root).
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Returns the current path signal (relative to the base URL).
	pub fn current_path(&self) -> &Signal<String> {
		&self.current_path
	}

	/// Returns the current params signal.
	pub fn current_params(&self) -> &Signal<HashMap<String, String>> {
		&self.current_params
	}

	/// Returns the current route name signal.
	pub fn current_route_name(&self) -> &Signal<Option<String>> {
		&self.current_route_name
	}

	/// Returns the full URL of the current location (base URL included).
	pub fn current_url(&self) -> String {
		join_base(&self.base_url, &self.current_path.get())
	}

	/// Matches a path (relative to the base URL) against the table.
	///
	/// Returns `None` when no route matches; an unmatched path is not an
	/// error, the surrounding shell decides what to render.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
		for route in &self.routes {
			if let Some((params, param_values)) = route.pattern.matches(path) {
				return Some(RouteMatch {
					route: route.clone(),
					params,
					param_values,
				});
			}
		}
		None
	}

	/// Matches a full URL, stripping the base prefix first.
	///
	/// URLs outside the base prefix never match.
	pub fn match_url(&self, url: &str) -> Option<RouteMatch> {
		strip_base(&self.base_url, url).and_then(|path| self.match_path(&path))
	}

	/// Navigates to a path using pushState semantics.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Push)
	}

	/// Navigates to a path using replaceState semantics.
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Replace)
	}

	/// Navigates to a named route, pushing a history entry.
	///
	/// Equivalent to `push` of the URL the route reverses to, so
	/// name-based and path-based navigation land in the same state.
	pub fn push_named(&self, name: &str, params: &[(&str, &str)]) -> Result<(), RouterError> {
		let path = self.reverse_relative(name, params)?;
		self.push(&path)
	}

	/// Navigates to a named route, replacing the current history entry.
	pub fn replace_named(&self, name: &str, params: &[(&str, &str)]) -> Result<(), RouterError> {
		let path = self.reverse_relative(name, params)?;
		self.replace(&path)
	}

	/// Internal navigation implementation.
	fn navigate(&self, path: &str, nav_type: NavigationType) -> Result<(), RouterError> {
		let route_match = self.match_path(path);

		let state = HistoryState::new(join_base(&self.base_url, path))
			.with_params(
				route_match
					.as_ref()
					.map(|m| m.params.clone())
					.unwrap_or_default(),
			)
			.with_route_name(
				route_match
					.as_ref()
					.and_then(|m| m.route.name())
					.unwrap_or(""),
			);

		let result = match nav_type {
			NavigationType::Push => self.history.push(&state),
			NavigationType::Replace => self.history.replace(&state),
			NavigationType::Pop => Ok(()),
		};
		result.map_err(RouterError::NavigationFailed)?;

		info_log!(
			"navigate {:?} -> {}",
			nav_type,
			route_match
				.as_ref()
				.and_then(|m| m.route.name())
				.unwrap_or("<no route>")
		);

		self.apply_match(path, route_match.as_ref());
		Ok(())
	}

	/// Updates the reactive signals from a (possibly absent) match.
	///
	/// The path signal is written last: a path subscriber that navigates
	/// again sees params and route name already settled, and its own
	/// writes are not overwritten afterwards.
	fn apply_match(&self, path: &str, route_match: Option<&RouteMatch>) {
		self.current_params
			.set(route_match.map(|m| m.params.clone()).unwrap_or_default());
		self.current_route_name
			.set(route_match.and_then(|m| m.route.name().map(str::to_string)));
		self.current_path.set(path.to_string());
	}

	/// Generates a full URL by route name with parameters.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidRouteName`] for an unknown name,
	/// [`RouterError::MissingParameter`] when the pattern needs a
	/// parameter that was not supplied, and
	/// [`RouterError::InvalidParameterValue`] when a supplied value
	/// cannot occupy one path segment.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let path = self.reverse_relative(name, params)?;
		Ok(join_base(&self.base_url, &path))
	}

	/// Reverses a route name to a path relative to the base URL.
	fn reverse_relative(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let index = self
			.named_routes
			.get(name)
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;

		let params_map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		self.routes[*index]
			.pattern
			.reverse(&params_map)
			.map_err(|e| match e {
				ReverseError::MissingParameter(param) => RouterError::MissingParameter {
					route: name.to_string(),
					param,
				},
				ReverseError::InvalidValue { param, value } => {
					RouterError::InvalidParameterValue { param, value }
				}
			})
	}

	/// Renders the currently matched route's view.
	///
	/// Falls back to the not-found view (or [`View::Empty`] when none is
	/// registered) for unmatched paths and handler extraction failures.
	pub fn render_current(&self) -> View {
		let path = self.current_path.get();

		match self.match_path(&path) {
			Some(route_match) => match route_match.render() {
				Ok(view) => view,
				Err(err) => {
					warn_log!("render of {} failed: {}", path, err);
					self.render_not_found()
				}
			},
			None => {
				warn_log!("no route for {}", path);
				self.render_not_found()
			}
		}
	}

	fn render_not_found(&self) -> View {
		match &self.not_found {
			Some(not_found) => not_found(),
			None => View::Empty,
		}
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}

	/// Moves one history entry back and recomputes the match.
	///
	/// On browser targets the traversal is asynchronous: the signals are
	/// updated by the popstate listener once the browser settles.
	pub fn back(&self) {
		if let Some(entry) = self.history.back() {
			self.apply_location(&entry.path);
		}
	}

	/// Moves one history entry forward and recomputes the match.
	///
	/// See [`Router::back`] for the browser-target caveat.
	pub fn forward(&self) {
		if let Some(entry) = self.history.forward() {
			self.apply_location(&entry.path);
		}
	}

	/// Rematches the current path against the table and updates signals.
	fn sync_current(&self) {
		let path = self.current_path.get();
		let route_match = self.match_path(&path);
		self.apply_match(&path, route_match.as_ref());
	}

	/// Recomputes signals for a full URL coming from the history.
	fn apply_location(&self, url: &str) {
		match strip_base(&self.base_url, url) {
			Some(path) => {
				let route_match = self.match_path(&path);
				self.apply_match(&path, route_match.as_ref());
			}
			None => {
				// Location left the app's base prefix; no active route.
				self.apply_match(url, None);
			}
		}
	}

	/// Sets up a popstate listener so browser back/forward navigation
	/// updates the router's signals without a page reload.
	///
	/// The listener closure is kept alive with `.forget()`; it persists
	/// for the lifetime of the page, which is intentional for SPA
	/// navigation handling.
	#[cfg(target_arch = "wasm32")]
	pub fn setup_history_listener(&self) {
		let base_url = self.base_url.clone();
		let path_signal = self.current_path.clone();
		let params_signal = self.current_params.clone();
		let route_name_signal = self.current_route_name.clone();

		let closure = setup_popstate_listener(move |url, state| {
			let path = strip_base(&base_url, &url).unwrap_or(url);
			path_signal.set(path);

			match state {
				Some(entry) => {
					params_signal.set(entry.params);
					route_name_signal.set(entry.route_name);
				}
				None => {
					params_signal.set(HashMap::new());
					route_name_signal.set(None);
				}
			}
		});

		if let Ok(c) = closure {
			c.forget();
		}
	}

	/// Non-WASM version of `setup_history_listener`: a no-op, since the
	/// in-memory history is driven synchronously through
	/// [`Router::back`] and [`Router::forward`].
	#[cfg(not(target_arch = "wasm32"))]
	pub fn setup_history_listener(&self) {}
}

/// Normalizes a base URL to "" (domain root) or "/prefix" form.
fn normalize_base_url(base: String) -> String {
	let trimmed = base.trim_end_matches('/');
	if trimmed.is_empty() {
		return String::new();
	}
	if trimmed.starts_with('/') {
		trimmed.to_string()
	} else {
		format!("/{}", trimmed)
	}
}

/// Joins the base URL and an app-relative path into a full URL.
fn join_base(base: &str, path: &str) -> String {
	if base.is_empty() {
		path.to_string()
	} else {
		format!("{}{}", base, path)
	}
}

/// Strips the base prefix from a full URL, yielding the app-relative
/// path. Returns `None` for URLs outside the base prefix.
fn strip_base(base: &str, url: &str) -> Option<String> {
	if base.is_empty() {
		return Some(url.to_string());
	}
	if url == base {
		return Some("/".to_string());
	}
	url.strip_prefix(base)
		.filter(|rest| rest.starts_with('/'))
		.map(str::to_string)
}
