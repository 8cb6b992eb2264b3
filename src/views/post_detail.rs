//! The per-fruit post detail page.

use crate::component::{Component, ElementView, IntoView, View};
use crate::router::{Link, Path};

/// Renders the detail page for one fruit post.
///
/// The `id` comes straight from the `/fruit/:id` path segment; it is a
/// free-form string, not an index into a known set, so unknown fruits
/// still get a page.
pub fn post_detail(Path(id): Path<String>) -> View {
	ElementView::new("main")
		.attr("class", "post-detail")
		.child(ElementView::new("h1").child(format!("All about {}", id)))
		.child(
			ElementView::new("p").child(format!("This is the post about {}.", id)),
		)
		.child(Link::new("/", "Back to all posts").render())
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_post_detail_renders_id() {
		let html = post_detail(Path("apple".to_string())).render_to_string();
		assert!(html.contains("<h1>All about apple</h1>"));
		assert!(html.contains("the post about apple"));
	}

	#[test]
	fn test_post_detail_escapes_id() {
		let html = post_detail(Path("<b>x</b>".to_string())).render_to_string();
		assert!(!html.contains("<b>x</b>"));
		assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
	}

	#[test]
	fn test_post_detail_links_home() {
		let html = post_detail(Path("kiwi".to_string())).render_to_string();
		assert!(html.contains("href=\"/\""));
	}
}
