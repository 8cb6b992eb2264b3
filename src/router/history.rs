//! History integration for clean-URL navigation.
//!
//! On browser targets this wraps the History API (`pushState`,
//! `replaceState`, `popstate`), so paths appear in the address bar
//! exactly as written, with no hash fragment. Elsewhere an in-memory
//! session history provides the same operations, which keeps the whole
//! navigation contract testable natively.
//!
//! Each history entry carries a serialized [`HistoryState`] so
//! back/forward can restore the matched route without re-running the
//! matcher inside the popstate handler.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
use parking_lot::RwLock;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// The state carried by a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	/// The entry's full URL path (base URL included).
	pub path: String,
	/// Path parameters extracted when the entry was created.
	pub params: HashMap<String, String>,
	/// Name of the matched route, if any.
	pub route_name: Option<String>,
}

impl HistoryState {
	/// Creates a new history state for the given path.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			params: HashMap::new(),
			route_name: None,
		}
	}

	/// Attaches the extracted path parameters.
	pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
		self.params = params;
		self
	}

	/// Attaches the matched route name. An empty name clears it.
	pub fn with_route_name(mut self, name: impl Into<String>) -> Self {
		let name = name.into();
		self.route_name = if name.is_empty() { None } else { Some(name) };
		self
	}
}

/// How a navigation manipulates the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// Adds a new entry (pushState).
	Push,
	/// Replaces the current entry (replaceState).
	Replace,
	/// Back/forward traversal (popstate).
	Pop,
}

/// The navigation history of one page session.
///
/// A thin facade over the browser History API on wasm32; an entry stack
/// with a cursor everywhere else. Cloning yields a handle to the same
/// session.
#[derive(Debug, Clone)]
pub struct SessionHistory {
	#[cfg(not(target_arch = "wasm32"))]
	inner: Arc<RwLock<MemoryHistory>>,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct MemoryHistory {
	entries: Vec<HistoryState>,
	cursor: usize,
}

impl Default for SessionHistory {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionHistory {
	/// Creates a session history with a single root entry.
	pub fn new() -> Self {
		Self {
			inner: Arc::new(RwLock::new(MemoryHistory {
				entries: vec![HistoryState::new("/")],
				cursor: 0,
			})),
		}
	}

	/// Returns the current entry's path.
	pub fn current_path(&self) -> Option<String> {
		let inner = self.inner.read();
		inner.entries.get(inner.cursor).map(|e| e.path.clone())
	}

	/// Returns the current entry's state.
	pub fn current(&self) -> Option<HistoryState> {
		let inner = self.inner.read();
		inner.entries.get(inner.cursor).cloned()
	}

	/// Pushes a new entry, discarding any forward entries.
	pub fn push(&self, state: &HistoryState) -> Result<(), String> {
		let mut inner = self.inner.write();
		let cursor = inner.cursor;
		inner.entries.truncate(cursor + 1);
		inner.entries.push(state.clone());
		inner.cursor += 1;
		Ok(())
	}

	/// Replaces the current entry.
	pub fn replace(&self, state: &HistoryState) -> Result<(), String> {
		let mut inner = self.inner.write();
		let cursor = inner.cursor;
		inner.entries[cursor] = state.clone();
		Ok(())
	}

	/// Moves one entry back, returning the new current entry.
	pub fn back(&self) -> Option<HistoryState> {
		let mut inner = self.inner.write();
		if inner.cursor == 0 {
			return None;
		}
		inner.cursor -= 1;
		inner.entries.get(inner.cursor).cloned()
	}

	/// Moves one entry forward, returning the new current entry.
	pub fn forward(&self) -> Option<HistoryState> {
		let mut inner = self.inner.write();
		if inner.cursor + 1 >= inner.entries.len() {
			return None;
		}
		inner.cursor += 1;
		inner.entries.get(inner.cursor).cloned()
	}

	/// Returns the number of entries in the session.
	pub fn len(&self) -> usize {
		self.inner.read().entries.len()
	}

	/// Returns whether the session has no entries.
	pub fn is_empty(&self) -> bool {
		self.inner.read().entries.is_empty()
	}
}

#[cfg(target_arch = "wasm32")]
impl SessionHistory {
	/// Creates a handle to the browser session history.
	pub fn new() -> Self {
		Self {}
	}

	/// Returns the current path from `window.location`.
	pub fn current_path(&self) -> Option<String> {
		web_sys::window().and_then(|w| w.location().pathname().ok())
	}

	/// Pushes a new entry via `history.pushState`.
	pub fn push(&self, state: &HistoryState) -> Result<(), String> {
		self.write_state(state, NavigationType::Push)
	}

	/// Replaces the current entry via `history.replaceState`.
	pub fn replace(&self, state: &HistoryState) -> Result<(), String> {
		self.write_state(state, NavigationType::Replace)
	}

	/// Asks the browser to go back one entry.
	///
	/// The traversal is asynchronous; the new state arrives through the
	/// popstate listener, so this always returns `None`.
	pub fn back(&self) -> Option<HistoryState> {
		if let Ok(history) = self.browser_history() {
			let _ = history.back();
		}
		None
	}

	/// Asks the browser to go forward one entry.
	///
	/// See [`SessionHistory::back`] for the asynchronous caveat.
	pub fn forward(&self) -> Option<HistoryState> {
		if let Ok(history) = self.browser_history() {
			let _ = history.forward();
		}
		None
	}

	fn browser_history(&self) -> Result<web_sys::History, String> {
		web_sys::window()
			.ok_or_else(|| "window not available".to_string())?
			.history()
			.map_err(|_| "history not available".to_string())
	}

	fn write_state(&self, state: &HistoryState, nav_type: NavigationType) -> Result<(), String> {
		let history = self.browser_history()?;
		let json = serde_json::to_string(state)
			.map_err(|e| format!("failed to serialize history state: {}", e))?;
		let js_state = JsValue::from_str(&json);

		match nav_type {
			NavigationType::Push => history
				.push_state_with_url(&js_state, "", Some(&state.path))
				.map_err(|_| "pushState failed".to_string()),
			NavigationType::Replace => history
				.replace_state_with_url(&js_state, "", Some(&state.path))
				.map_err(|_| "replaceState failed".to_string()),
			NavigationType::Pop => Ok(()),
		}
	}
}

/// Registers a popstate listener for browser back/forward navigation.
///
/// The callback receives the new path and the deserialized entry state,
/// if any. The returned closure must be kept alive (or leaked with
/// `.forget()`) for the lifetime of the page.
#[cfg(target_arch = "wasm32")]
pub(crate) fn setup_popstate_listener<F>(
	callback: F,
) -> Result<Closure<dyn FnMut(web_sys::PopStateEvent)>, String>
where
	F: Fn(String, Option<HistoryState>) + 'static,
{
	let closure = Closure::wrap(Box::new(move |event: web_sys::PopStateEvent| {
		let path = web_sys::window()
			.and_then(|w| w.location().pathname().ok())
			.unwrap_or_else(|| "/".to_string());
		let state = event
			.state()
			.as_string()
			.and_then(|json| serde_json::from_str(&json).ok());
		callback(path, state);
	}) as Box<dyn FnMut(web_sys::PopStateEvent)>);

	web_sys::window()
		.ok_or_else(|| "window not available".to_string())?
		.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
		.map_err(|_| "failed to register popstate listener".to_string())?;

	Ok(closure)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;

	#[test]
	fn test_history_state_builder() {
		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());

		let state = HistoryState::new("/fruit/42")
			.with_params(params.clone())
			.with_route_name("fruit");

		assert_eq!(state.path, "/fruit/42");
		assert_eq!(state.params, params);
		assert_eq!(state.route_name.as_deref(), Some("fruit"));
	}

	#[test]
	fn test_empty_route_name_clears() {
		let state = HistoryState::new("/nope").with_route_name("");
		assert_eq!(state.route_name, None);
	}

	#[test]
	fn test_new_session_has_root_entry() {
		let history = SessionHistory::new();
		assert_eq!(history.current_path().as_deref(), Some("/"));
		assert_eq!(history.len(), 1);
	}

	#[test]
	fn test_push_and_back() {
		let history = SessionHistory::new();
		history.push(&HistoryState::new("/about")).unwrap();
		history.push(&HistoryState::new("/fruit/apple")).unwrap();

		assert_eq!(history.current_path().as_deref(), Some("/fruit/apple"));

		let entry = history.back().unwrap();
		assert_eq!(entry.path, "/about");

		let entry = history.forward().unwrap();
		assert_eq!(entry.path, "/fruit/apple");
	}

	#[test]
	fn test_back_at_root_returns_none() {
		let history = SessionHistory::new();
		assert!(history.back().is_none());
	}

	#[test]
	fn test_forward_at_tip_returns_none() {
		let history = SessionHistory::new();
		history.push(&HistoryState::new("/about")).unwrap();
		assert!(history.forward().is_none());
	}

	#[test]
	fn test_push_discards_forward_entries() {
		let history = SessionHistory::new();
		history.push(&HistoryState::new("/about")).unwrap();
		history.back();
		history.push(&HistoryState::new("/create-a-post")).unwrap();

		// the /about branch is gone
		assert!(history.forward().is_none());
		assert_eq!(history.current_path().as_deref(), Some("/create-a-post"));
		assert_eq!(history.len(), 2);
	}

	#[test]
	fn test_replace_keeps_length() {
		let history = SessionHistory::new();
		history.push(&HistoryState::new("/about")).unwrap();
		history.replace(&HistoryState::new("/fruit/1")).unwrap();

		assert_eq!(history.len(), 2);
		assert_eq!(history.current_path().as_deref(), Some("/fruit/1"));

		let entry = history.back().unwrap();
		assert_eq!(entry.path, "/");
	}

	#[test]
	fn test_clones_share_session() {
		let history = SessionHistory::new();
		let other = history.clone();
		history.push(&HistoryState::new("/about")).unwrap();
		assert_eq!(other.current_path().as_deref(), Some("/about"));
	}

	#[test]
	fn test_state_round_trips_through_json() {
		let state = HistoryState::new("/fruit/42").with_route_name("fruit");
		let json = serde_json::to_string(&state).unwrap();
		let parsed: HistoryState = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, state);
	}
}
