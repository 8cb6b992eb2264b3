//! Fallback view for unmatched paths.

use crate::component::{Component, ElementView, IntoView, View};
use crate::router::Link;

/// Renders the not-found page.
///
/// Shown for any path outside the route table. Reaching it is a normal
/// navigation outcome, not an error.
pub fn not_found() -> View {
	ElementView::new("main")
		.attr("class", "not-found")
		.child(ElementView::new("h1").child("Page not found"))
		.child(Link::new("/", "Go home").render())
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_not_found_renders() {
		let html = not_found().render_to_string();
		assert!(html.contains("<h1>Page not found</h1>"));
		assert!(html.contains("href=\"/\""));
	}
}
