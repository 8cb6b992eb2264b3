//! The create-a-post page.

use crate::component::{ElementView, IntoView, View};

/// Renders the create-a-post form.
pub fn create_post() -> View {
	let form = ElementView::new("form")
		.attr("class", "create-post-form")
		.child(
			ElementView::new("label")
				.attr("for", "title")
				.child("Title"),
		)
		.child(
			ElementView::new("input")
				.attr("id", "title")
				.attr("name", "title")
				.attr("type", "text"),
		)
		.child(ElementView::new("label").attr("for", "body").child("Body"))
		.child(
			ElementView::new("textarea")
				.attr("id", "body")
				.attr("name", "body"),
		)
		.child(
			ElementView::new("button")
				.attr("type", "submit")
				.child("Publish"),
		);

	ElementView::new("main")
		.attr("class", "create-post")
		.child(ElementView::new("h1").child("Create a post"))
		.child(form)
		.into_view()
}
