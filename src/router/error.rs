//! Error types for client-side routing.

use thiserror::Error;

/// Error type for path parameter extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
	/// Failed to parse a parameter value.
	#[error("failed to parse parameter '{raw_value}' as {param_type}: {message}")]
	Parse {
		/// Expected type name.
		param_type: &'static str,
		/// Raw string value that failed to parse.
		raw_value: String,
		/// Error message from parsing.
		message: String,
	},
	/// Parameter count mismatch.
	#[error("parameter count mismatch: expected {expected}, got {actual}")]
	CountMismatch {
		/// Expected number of parameters.
		expected: usize,
		/// Actual number of parameters.
		actual: usize,
	},
}

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// No route name matched in a reverse lookup.
	#[error("invalid route name: {0}")]
	InvalidRouteName(String),
	/// A parameter required by the pattern was not supplied.
	#[error("missing parameter for route '{route}': {param}")]
	MissingParameter {
		/// The route name the reverse lookup was for.
		route: String,
		/// The missing parameter name.
		param: String,
	},
	/// A parameter value cannot occupy a single path segment.
	#[error("invalid value '{value}' for parameter '{param}': must be one non-empty path segment")]
	InvalidParameterValue {
		/// The parameter name.
		param: String,
		/// The rejected value.
		value: String,
	},
	/// The history backend rejected the navigation.
	#[error("navigation failed: {0}")]
	NavigationFailed(String),
	/// Path parameter extraction failed.
	#[error("path extraction error: {0}")]
	PathExtraction(#[from] PathError),
}
