//! Path parameter extraction for typed route handlers.
//!
//! The detail route binds one `:id` segment; `Path<T>` hands it to the
//! view with the type it asks for. The `id` stays a plain `String` in
//! this app, but numeric identifiers extract just as well.
//!
//! # Example
//!
//! ```
//! use fruit_posts::router::{FromPath, ParamContext, Path};
//! use std::collections::HashMap;
//!
//! let mut params = HashMap::new();
//! params.insert("id".to_string(), "apple".to_string());
//! let ctx = ParamContext::new(params, vec!["apple".to_string()]);
//!
//! let Path(id) = Path::<String>::from_path(&ctx).unwrap();
//! assert_eq!(id, "apple");
//! ```

use std::collections::HashMap;
use std::ops::Deref;

use super::error::PathError;

/// Context for parameter extraction.
///
/// Contains both named parameters and the parameter values in the order
/// they appear in the pattern.
#[derive(Debug, Clone)]
pub struct ParamContext {
	/// Named parameters extracted from the path.
	params: HashMap<String, String>,
	/// Parameter values in the order they appear in the pattern.
	param_values: Vec<String>,
}

impl ParamContext {
	/// Creates a new parameter context.
	pub fn new(params: HashMap<String, String>, param_values: Vec<String>) -> Self {
		Self {
			params,
			param_values,
		}
	}

	/// Looks up a parameter by name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	/// Returns the parameter values in pattern order.
	pub fn values(&self) -> &[String] {
		&self.param_values
	}

	/// Returns the number of parameters.
	pub fn len(&self) -> usize {
		self.param_values.len()
	}

	/// Returns whether there are no parameters.
	pub fn is_empty(&self) -> bool {
		self.param_values.is_empty()
	}
}

/// Trait for extracting a typed value from path parameters.
pub trait FromPath: Sized {
	/// Extracts Self from the parameter context.
	///
	/// # Errors
	///
	/// Returns [`PathError::CountMismatch`] if the number of parameters
	/// doesn't match, [`PathError::Parse`] if parsing fails.
	fn from_path(ctx: &ParamContext) -> Result<Self, PathError>;
}

/// Wrapper type for path parameters.
///
/// Destructure it in a handler signature to get at the inner value:
/// `|Path(id): Path<String>| ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
	/// Unwraps the inner value.
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T> Deref for Path<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> AsRef<T> for Path<T> {
	fn as_ref(&self) -> &T {
		&self.0
	}
}

fn single_value(ctx: &ParamContext) -> Result<&str, PathError> {
	if ctx.param_values.len() != 1 {
		return Err(PathError::CountMismatch {
			expected: 1,
			actual: ctx.param_values.len(),
		});
	}
	Ok(&ctx.param_values[0])
}

// Macro for implementing FromPath for parseable primitive types
macro_rules! impl_from_path_for_primitive {
	($($ty:ty => $type_name:expr),* $(,)?) => {
		$(
			impl FromPath for $ty {
				fn from_path(ctx: &ParamContext) -> Result<Self, PathError> {
					let raw = single_value(ctx)?;
					raw.parse::<$ty>().map_err(|e| PathError::Parse {
						param_type: $type_name,
						raw_value: raw.to_string(),
						message: e.to_string(),
					})
				}
			}
		)*
	};
}

impl_from_path_for_primitive! {
	i32 => "i32",
	i64 => "i64",
	u32 => "u32",
	u64 => "u64",
}

// String needs no parsing
impl FromPath for String {
	fn from_path(ctx: &ParamContext) -> Result<Self, PathError> {
		single_value(ctx).map(str::to_string)
	}
}

impl<T: FromPath> FromPath for Path<T> {
	fn from_path(ctx: &ParamContext) -> Result<Self, PathError> {
		T::from_path(ctx).map(Path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ctx_with(values: &[&str]) -> ParamContext {
		ParamContext::new(
			HashMap::new(),
			values.iter().map(|v| v.to_string()).collect(),
		)
	}

	#[test]
	fn test_param_context_accessors() {
		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());
		let ctx = ParamContext::new(params, vec!["42".to_string()]);

		assert_eq!(ctx.get("id"), Some("42"));
		assert_eq!(ctx.get("missing"), None);
		assert_eq!(ctx.values(), &["42".to_string()]);
		assert_eq!(ctx.len(), 1);
		assert!(!ctx.is_empty());
	}

	#[test]
	fn test_param_context_empty() {
		let ctx = ctx_with(&[]);
		assert_eq!(ctx.len(), 0);
		assert!(ctx.is_empty());
	}

	#[test]
	fn test_from_path_string() {
		let result = String::from_path(&ctx_with(&["apple"]));
		assert_eq!(result, Ok("apple".to_string()));
	}

	#[test]
	fn test_from_path_i64() {
		let result = i64::from_path(&ctx_with(&["9223372036854775807"]));
		assert_eq!(result, Ok(9223372036854775807));
	}

	#[test]
	fn test_from_path_parse_error() {
		let result = u32::from_path(&ctx_with(&["not_a_number"]));

		match result {
			Err(PathError::Parse {
				param_type,
				raw_value,
				..
			}) => {
				assert_eq!(param_type, "u32");
				assert_eq!(raw_value, "not_a_number");
			}
			other => panic!("expected Parse error, got {:?}", other),
		}
	}

	#[test]
	fn test_from_path_count_mismatch() {
		let result = String::from_path(&ctx_with(&["a", "b"]));

		match result {
			Err(PathError::CountMismatch { expected, actual }) => {
				assert_eq!(expected, 1);
				assert_eq!(actual, 2);
			}
			other => panic!("expected CountMismatch, got {:?}", other),
		}
	}

	#[test]
	fn test_path_wrapper() {
		let path = Path::<String>::from_path(&ctx_with(&["apple"])).unwrap();
		assert_eq!(*path, "apple");
		assert_eq!(path.as_ref(), "apple");
		assert_eq!(path.into_inner(), "apple");
	}
}
