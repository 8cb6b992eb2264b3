//! The about page.

use crate::component::{ElementView, IntoView, View};

/// Renders the about page.
pub fn about() -> View {
	ElementView::new("main")
		.attr("class", "about")
		.child(ElementView::new("h1").child("About"))
		.child(
			ElementView::new("p")
				.child("A little site where we post opinions about fruit."),
		)
		.into_view()
}
