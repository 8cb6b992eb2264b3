//! Path pattern matching for URL routing.
//!
//! Patterns are literal paths with optional `:name` parameter segments,
//! e.g. `/fruit/:id`. A parameter segment matches exactly one non-empty,
//! slash-free URL segment; there are no wildcards, optional parameters,
//! or regex-constrained parameters.

use std::collections::HashMap;

/// A compiled path pattern.
///
/// - `/about` - exact match
/// - `/fruit/:id` - single path parameter bound to `id`
///
/// A parameter matches one non-empty path component, so `/fruit/:id`
/// matches `/fruit/apple` but not `/fruit/` or `/fruit/a/b`.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled regex pattern.
	regex: regex::Regex,
	/// Parameter names in order.
	param_names: Vec<String>,
	/// Whether this is an exact match pattern.
	is_exact: bool,
}

/// Why reversing a pattern into a concrete path failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReverseError {
	/// The pattern needs a parameter that was not supplied.
	MissingParameter(String),
	/// The supplied value cannot occupy a single path segment.
	InvalidValue {
		/// The parameter name.
		param: String,
		/// The rejected value.
		value: String,
	},
}

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

impl PathPattern {
	/// Creates a new path pattern from a pattern string.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - the pattern exceeds the maximum length (1024 bytes)
	/// - the pattern has too many path segments (>32)
	/// - a `:` segment has an empty parameter name
	/// - the same parameter name appears twice
	/// - the pattern compiles to an invalid regex
	pub fn new(pattern: &str) -> Result<Self, String> {
		// Length and segment limits bound regex compilation cost.
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(format!(
				"pattern length {} exceeds maximum allowed length of {} bytes",
				pattern.len(),
				MAX_PATTERN_LENGTH
			));
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(format!(
				"pattern has {} path segments, exceeding maximum of {}",
				segment_count, MAX_PATH_SEGMENTS
			));
		}

		let (regex_str, param_names) = Self::compile_pattern(pattern)?;

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| format!("failed to compile pattern regex: {}", e))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
			is_exact: !pattern.contains(':'),
		})
	}

	/// Compiles a pattern string into a regex and extracts parameter names.
	fn compile_pattern(pattern: &str) -> Result<(String, Vec<String>), String> {
		let mut regex_str = String::from("^");
		let mut param_names: Vec<String> = Vec::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				':' => {
					// Start of a parameter: the name runs until the next '/'.
					let mut param = String::new();
					while let Some(&next) = chars.peek() {
						if next == '/' {
							break;
						}
						param.push(next);
						chars.next();
					}

					if param.is_empty() {
						return Err(format!(
							"pattern '{}' has a ':' segment with an empty parameter name",
							pattern
						));
					}
					if param_names.contains(&param) {
						return Err(format!(
							"pattern '{}' binds parameter '{}' more than once",
							pattern, param
						));
					}

					regex_str.push_str(&format!("(?P<{}>[^/]+)", param));
					param_names.push(param);
				}
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\'
				| '{' | '}' => {
					// Escape regex special characters
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => {
					regex_str.push(c);
				}
			}
		}

		regex_str.push('$');
		Ok((regex_str, param_names))
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Attempts to match a path against this pattern.
	///
	/// Returns `Some((params, param_values))` if the path matches, where
	/// `params` maps parameter names to their extracted values and
	/// `param_values` holds the values in pattern order.
	pub fn matches(&self, path: &str) -> Option<(HashMap<String, String>, Vec<String>)> {
		self.regex.captures(path).map(|caps| {
			let params: HashMap<String, String> = self
				.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.clone(), m.as_str().to_string()))
				})
				.collect();

			let param_values: Vec<String> = self
				.param_names
				.iter()
				.filter_map(|name| caps.name(name).map(|m| m.as_str().to_string()))
				.collect();

			(params, param_values)
		})
	}

	/// Checks if this pattern would match the given path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Returns whether this is an exact match pattern (no parameters).
	pub fn is_exact(&self) -> bool {
		self.is_exact
	}

	/// Generates a path from this pattern with the given parameters.
	///
	/// # Errors
	///
	/// Returns [`ReverseError::MissingParameter`] when the pattern needs
	/// a parameter absent from `params`, and [`ReverseError::InvalidValue`]
	/// when a supplied value is empty or contains a `/`: a parameter
	/// matches exactly one non-empty segment, so such a value produces a
	/// URL this pattern could never match back.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Result<String, ReverseError> {
		let mut result = String::with_capacity(self.pattern.len());
		let mut chars = self.pattern.chars().peekable();

		while let Some(c) = chars.next() {
			if c == ':' {
				let mut name = String::new();
				while let Some(&next) = chars.peek() {
					if next == '/' {
						break;
					}
					name.push(next);
					chars.next();
				}
				match params.get(&name) {
					Some(value) => {
						if value.is_empty() || value.contains('/') {
							return Err(ReverseError::InvalidValue {
								param: name,
								value: value.clone(),
							});
						}
						result.push_str(value);
					}
					None => return Err(ReverseError::MissingParameter(name)),
				}
			} else {
				result.push(c);
			}
		}

		Ok(result)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_exact_pattern() {
		let pattern = PathPattern::new("/about").unwrap();
		assert!(pattern.is_exact());
		assert!(pattern.is_match("/about"));
		assert!(!pattern.is_match("/about/us"));
		assert!(!pattern.is_match("/abou"));
	}

	#[test]
	fn test_root_pattern() {
		let pattern = PathPattern::new("/").unwrap();
		assert!(pattern.is_match("/"));
		assert!(!pattern.is_match("/about"));
	}

	#[rstest]
	#[case("/fruit/apple", "apple")]
	#[case("/fruit/42", "42")]
	#[case("/fruit/dragon-fruit", "dragon-fruit")]
	fn test_single_param(#[case] path: &str, #[case] expected: &str) {
		let pattern = PathPattern::new("/fruit/:id").unwrap();
		assert!(!pattern.is_exact());

		let (params, param_values) = pattern.matches(path).unwrap();
		assert_eq!(params.get("id").map(String::as_str), Some(expected));
		assert_eq!(param_values, vec![expected.to_string()]);
	}

	#[test]
	fn test_empty_segment_does_not_match() {
		let pattern = PathPattern::new("/fruit/:id").unwrap();
		assert!(!pattern.is_match("/fruit/"));
		assert!(!pattern.is_match("/fruit"));
	}

	#[test]
	fn test_param_does_not_span_segments() {
		let pattern = PathPattern::new("/fruit/:id").unwrap();
		assert!(!pattern.is_match("/fruit/a/b"));
	}

	#[test]
	fn test_param_names() {
		let pattern = PathPattern::new("/fruit/:id").unwrap();
		assert_eq!(pattern.param_names(), &["id".to_string()]);
	}

	#[test]
	fn test_reverse() {
		let pattern = PathPattern::new("/fruit/:id").unwrap();
		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());

		assert_eq!(pattern.reverse(&params), Ok("/fruit/42".to_string()));
	}

	#[test]
	fn test_reverse_static() {
		let pattern = PathPattern::new("/about").unwrap();
		assert_eq!(pattern.reverse(&HashMap::new()), Ok("/about".to_string()));
	}

	#[test]
	fn test_reverse_missing_param() {
		let pattern = PathPattern::new("/fruit/:id").unwrap();
		assert_eq!(
			pattern.reverse(&HashMap::new()),
			Err(ReverseError::MissingParameter("id".to_string()))
		);
	}

	#[rstest]
	#[case("a/b")]
	#[case("")]
	fn test_reverse_rejects_unmatchable_value(#[case] value: &str) {
		let pattern = PathPattern::new("/fruit/:id").unwrap();
		let mut params = HashMap::new();
		params.insert("id".to_string(), value.to_string());

		assert_eq!(
			pattern.reverse(&params),
			Err(ReverseError::InvalidValue {
				param: "id".to_string(),
				value: value.to_string(),
			})
		);
	}

	#[test]
	fn test_special_chars_escaped() {
		let pattern = PathPattern::new("/api/v1.0").unwrap();
		assert!(pattern.is_match("/api/v1.0"));
		assert!(!pattern.is_match("/api/v1X0"));
	}

	#[test]
	fn test_pattern_display() {
		let pattern = PathPattern::new("/fruit/:id").unwrap();
		assert_eq!(format!("{}", pattern), "/fruit/:id");
	}

	#[test]
	fn test_pattern_equality() {
		let p1 = PathPattern::new("/fruit/:id").unwrap();
		let p2 = PathPattern::new("/fruit/:id").unwrap();
		let p3 = PathPattern::new("/fruit/:name").unwrap();

		assert_eq!(p1, p2);
		assert_ne!(p1, p3);
	}

	#[test]
	fn test_pattern_rejects_empty_param_name() {
		let result = PathPattern::new("/fruit/:");
		assert!(result.is_err());
		assert!(result.unwrap_err().contains("empty parameter name"));
	}

	#[test]
	fn test_pattern_rejects_duplicate_param_name() {
		let result = PathPattern::new("/a/:id/b/:id");
		assert!(result.is_err());
		assert!(result.unwrap_err().contains("more than once"));
	}

	#[test]
	fn test_pattern_rejects_excessive_length() {
		let long_pattern = "/".to_string() + &"a".repeat(1025);
		let result = PathPattern::new(&long_pattern);
		assert!(result.is_err());
		assert!(
			result
				.unwrap_err()
				.contains("exceeds maximum allowed length")
		);
	}

	#[test]
	fn test_pattern_rejects_excessive_segments() {
		let segments: Vec<&str> = (0..35).map(|_| "seg").collect();
		let pattern = format!("/{}", segments.join("/"));
		let result = PathPattern::new(&pattern);
		assert!(result.is_err());
		assert!(result.unwrap_err().contains("exceeding maximum"));
	}
}
