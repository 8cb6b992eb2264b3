//! The home page: the post listing.

use crate::component::{Component, ElementView, IntoView, View};
use crate::router::Link;

const FEATURED_FRUITS: &[(&str, &str)] = &[
	("apple", "Apples are the best"),
	("banana", "Bananas before a run"),
	("cherry", "Cherry season is short"),
];

/// Renders the home page with links to the featured posts.
pub fn home() -> View {
	let posts = ElementView::new("ul").attr("class", "post-list").children(
		FEATURED_FRUITS.iter().map(|(id, title)| {
			ElementView::new("li")
				.child(Link::new(format!("/fruit/{}", id), *title).render())
		}),
	);

	ElementView::new("main")
		.attr("class", "home")
		.child(ElementView::new("h1").child("Posts about fruit"))
		.child(posts)
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_home_renders_heading() {
		let html = home().render_to_string();
		assert!(html.contains("<h1>Posts about fruit</h1>"));
	}

	#[test]
	fn test_home_links_to_posts() {
		let html = home().render_to_string();
		assert!(html.contains("href=\"/fruit/apple\""));
		assert!(html.contains("href=\"/fruit/banana\""));
		assert!(html.contains("href=\"/fruit/cherry\""));
	}
}
