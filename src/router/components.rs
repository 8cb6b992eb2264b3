//! Router components for navigation.
//!
//! This module provides Link and RouterOutlet components for
//! declarative navigation in view trees.

use super::core::Router;
use crate::component::{Component, ElementView, IntoView, View};

/// A link component that navigates without full page reload.
///
/// Similar to HTML `<a>` but tagged for click interception, so
/// navigation goes through the History API instead of a full request.
///
/// # Example
///
/// ```
/// use fruit_posts::router::Link;
///
/// let link = Link::new("/fruit/apple", "Apple");
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	/// The destination path.
	to: String,
	/// The link text.
	content: String,
	/// Additional CSS classes.
	class: Option<String>,
	/// Whether to replace the current history entry.
	replace: bool,
}

impl Link {
	/// Creates a new link.
	pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			class: None,
			replace: false,
		}
	}

	/// Creates a link to a named route, with the base URL applied.
	///
	/// # Errors
	///
	/// Fails like [`Router::reverse`] for unknown names or missing
	/// parameters.
	pub fn named(
		router: &Router,
		name: &str,
		params: &[(&str, &str)],
		content: impl Into<String>,
	) -> Result<Self, super::error::RouterError> {
		Ok(Self::new(router.reverse(name, params)?, content))
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns the link text.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Returns whether this is a replace navigation.
	pub fn is_replace(&self) -> bool {
		self.replace
	}
}

impl Component for Link {
	fn render(&self) -> View {
		let mut el = ElementView::new("a")
			.attr("href", self.to.clone())
			.attr("data-link", "true");

		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}
		if self.replace {
			el = el.attr("data-replace", "true");
		}

		el.child(self.content.clone()).into_view()
	}

	fn name() -> &'static str {
		"Link"
	}
}

/// A component that renders the matched route's content.
///
/// Place this where route content should appear in the page shell.
#[derive(Debug, Clone, Default)]
pub struct RouterOutlet {
	/// The ID attribute for the outlet element.
	id: Option<String>,
	/// CSS class for the outlet element.
	class: Option<String>,
}

impl RouterOutlet {
	/// Creates a new router outlet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the ID attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Renders the outlet with the router's current view inside it.
	pub fn render_with(&self, router: &Router) -> View {
		self.wrapper().child(router.render_current()).into_view()
	}

	fn wrapper(&self) -> ElementView {
		let mut el = ElementView::new("div").attr("data-router-outlet", "true");

		if let Some(ref id) = self.id {
			el = el.attr("id", id.clone());
		}
		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}

		el
	}
}

impl Component for RouterOutlet {
	fn render(&self) -> View {
		// Empty placeholder; render_with fills it from a router
		self.wrapper().into_view()
	}

	fn name() -> &'static str {
		"RouterOutlet"
	}
}
