//! Component trait definition.

use super::into_view::View;

/// Trait for reusable UI components.
///
/// Components are the building blocks of the UI. They encapsulate
/// state and rendering logic into reusable units. Page views can stay
/// plain functions; `Component` is for units that carry configuration,
/// like [`Link`](crate::router::Link).
///
/// # Example
///
/// ```
/// use fruit_posts::component::{Component, ElementView, IntoView, View};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> View {
///         ElementView::new("div")
///             .attr("class", "greeting")
///             .child(format!("Hello, {}!", self.name))
///             .into_view()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
