//! IntoView trait and View enum for component rendering.

use std::borrow::Cow;

/// Error type for mounting views to the DOM.
#[derive(Debug, Clone)]
pub enum MountError {
	/// Window object not available.
	NoWindow,
	/// Document object not available.
	NoDocument,
	/// Failed to create an element.
	CreateElementFailed,
	/// Failed to set an attribute.
	SetAttributeFailed,
	/// Failed to append a child element.
	AppendChildFailed,
}

impl std::fmt::Display for MountError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			MountError::NoWindow => write!(f, "Window object not available"),
			MountError::NoDocument => write!(f, "Document object not available"),
			MountError::CreateElementFailed => write!(f, "Failed to create element"),
			MountError::SetAttributeFailed => write!(f, "Failed to set attribute"),
			MountError::AppendChildFailed => write!(f, "Failed to append child"),
		}
	}
}

impl std::error::Error for MountError {}

/// A unified representation of renderable content.
///
/// View is the core abstraction for all UI elements in the component
/// system. It can represent DOM elements, text nodes, fragments, or
/// nothing at all.
#[derive(Debug)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<View>),
	/// An empty view (renders nothing).
	Empty,
}

/// Represents a DOM element in the view tree.
#[derive(Debug)]
pub struct ElementView {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<View>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}

	/// Mounts the view into a DOM element (client-side only).
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &web_sys::Element) -> Result<(), MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		self.mount_inner(&document, parent)
	}

	#[cfg(target_arch = "wasm32")]
	fn mount_inner(
		self,
		document: &web_sys::Document,
		parent: &web_sys::Element,
	) -> Result<(), MountError> {
		match self {
			View::Element(el) => {
				let element = document
					.create_element(el.tag_name())
					.map_err(|_| MountError::CreateElementFailed)?;

				for (name, value) in el.attrs {
					element
						.set_attribute(&name, &value)
						.map_err(|_| MountError::SetAttributeFailed)?;
				}

				for child in el.children {
					child.mount_inner(document, &element)?;
				}

				parent
					.append_child(&element)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Text(text) => {
				let node = document.create_text_node(&text);
				parent
					.append_child(&node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Fragment(children) => {
				for child in children {
					child.mount_inner(document, parent)?;
				}
			}
			View::Empty => {}
		}
		Ok(())
	}
}

/// Trait for converting values into a [`View`].
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

/// Escapes HTML special characters in text content and attribute values.
fn html_escape(input: &str) -> Cow<'_, str> {
	if !input.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(input);
	}

	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_element() {
		let view = ElementView::new("div")
			.attr("class", "card")
			.child("Apple")
			.into_view();
		assert_eq!(view.render_to_string(), "<div class=\"card\">Apple</div>");
	}

	#[test]
	fn test_render_void_element() {
		let view = ElementView::new("input").attr("type", "text").into_view();
		assert_eq!(view.render_to_string(), "<input type=\"text\" />");
	}

	#[test]
	fn test_render_fragment() {
		let view = View::fragment([View::text("a"), View::text("b")]);
		assert_eq!(view.render_to_string(), "ab");
	}

	#[test]
	fn test_render_empty() {
		assert_eq!(View::empty().render_to_string(), "");
	}

	#[test]
	fn test_text_is_escaped() {
		let view = View::text("<script>alert(\"x\")</script>");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
		);
	}

	#[test]
	fn test_attr_is_escaped() {
		let view = ElementView::new("a").attr("title", "fruit & veg").into_view();
		assert_eq!(
			view.render_to_string(),
			"<a title=\"fruit &amp; veg\"></a>"
		);
	}

	#[test]
	fn test_option_into_view() {
		assert_eq!(Some("hi").into_view().render_to_string(), "hi");
		assert_eq!(None::<String>.into_view().render_to_string(), "");
	}

	#[test]
	fn test_nested_children() {
		let view = ElementView::new("ul")
			.children(["one", "two"].map(|s| ElementView::new("li").child(s)))
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<ul><li>one</li><li>two</li></ul>"
		);
	}
}
