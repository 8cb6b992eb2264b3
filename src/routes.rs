//! The application route table.
//!
//! One place wires URLs to page views. Order matters: static paths come
//! before the parameterized detail route so they can never be shadowed
//! by it.

use crate::router::Router;
use crate::views;

/// Builds the app router rooted at the given base URL.
///
/// Pass `"/"` when the app is served from the domain root, or the
/// subpath prefix (for example `"/fruit-posts/"`) when it is not.
pub fn build(base_url: &str) -> Router {
	Router::new(base_url)
		.named_route("home", "/", views::home)
		.named_route("create-a-post", "/create-a-post", views::create_post)
		.named_route("about", "/about", views::about)
		.named_route_param("fruit", "/fruit/:id", views::post_detail)
		.not_found(views::not_found)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_table_has_four_routes() {
		let router = build("/");
		assert_eq!(router.route_count(), 4);
		for name in ["home", "create-a-post", "about", "fruit"] {
			assert!(router.has_route(name), "missing route {}", name);
		}
	}

	#[test]
	fn test_table_reverses_all_names() {
		let router = build("/");
		assert_eq!(router.reverse("home", &[]).unwrap(), "/");
		assert_eq!(
			router.reverse("create-a-post", &[]).unwrap(),
			"/create-a-post"
		);
		assert_eq!(router.reverse("about", &[]).unwrap(), "/about");
		assert_eq!(
			router.reverse("fruit", &[("id", "kiwi")]).unwrap(),
			"/fruit/kiwi"
		);
	}

	#[test]
	fn test_initial_location_matches_home() {
		let router = build("/");
		assert_eq!(router.current_route_name().get().as_deref(), Some("home"));
		assert_eq!(router.current_url(), "/");
	}

	#[test]
	fn test_unmatched_renders_not_found() {
		let router = build("/");
		router.push("/posts-about-vegetables").unwrap();
		assert!(router.render_current().render_to_string().contains("Page not found"));
	}
}
