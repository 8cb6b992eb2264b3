//! Route handler abstractions for typed parameter extraction.
//!
//! A handler is the opaque factory behind a route's `component` field:
//! the router only knows it can produce a [`View`] given the extracted
//! path parameters. Two shapes cover this app's table: `Fn() -> View`
//! for the static routes and `Fn(Path<T>) -> View` for the detail route.

use super::error::RouterError;
use super::params::{FromPath, ParamContext, Path};
use crate::component::View;
use std::marker::PhantomData;
use std::sync::Arc;

/// Trait for route handlers.
pub trait RouteHandler: Send + Sync {
	/// Produces the route's view for the given parameter context.
	///
	/// # Errors
	///
	/// Returns [`RouterError::PathExtraction`] if parameter extraction
	/// fails.
	fn handle(&self, ctx: &ParamContext) -> Result<View, RouterError>;
}

/// Handler for routes without parameters.
pub(crate) struct NoParamsHandler<F> {
	handler: F,
}

impl<F> NoParamsHandler<F> {
	pub(crate) fn new(handler: F) -> Self {
		Self { handler }
	}
}

impl<F> RouteHandler for NoParamsHandler<F>
where
	F: Fn() -> View + Send + Sync,
{
	fn handle(&self, _ctx: &ParamContext) -> Result<View, RouterError> {
		Ok((self.handler)())
	}
}

/// Handler for routes with one typed path parameter.
pub(crate) struct WithParamHandler<F, T> {
	handler: F,
	// fn() -> T keeps the auto Send/Sync impls independent of T
	_phantom: PhantomData<fn() -> T>,
}

impl<F, T> WithParamHandler<F, T> {
	pub(crate) fn new(handler: F) -> Self {
		Self {
			handler,
			_phantom: PhantomData,
		}
	}
}

impl<F, T> RouteHandler for WithParamHandler<F, T>
where
	F: Fn(Path<T>) -> View + Send + Sync,
	T: FromPath,
{
	fn handle(&self, ctx: &ParamContext) -> Result<View, RouterError> {
		let param = Path::<T>::from_path(ctx).map_err(RouterError::PathExtraction)?;
		Ok((self.handler)(param))
	}
}

/// Creates a no-params handler.
pub(crate) fn no_params_handler<F>(handler: F) -> Arc<dyn RouteHandler>
where
	F: Fn() -> View + Send + Sync + 'static,
{
	Arc::new(NoParamsHandler::new(handler))
}

/// Creates a single-param handler.
pub(crate) fn with_param_handler<F, T>(handler: F) -> Arc<dyn RouteHandler>
where
	F: Fn(Path<T>) -> View + Send + Sync + 'static,
	T: FromPath + 'static,
{
	Arc::new(WithParamHandler::new(handler))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::error::PathError;
	use std::collections::HashMap;

	fn test_view() -> View {
		View::text("Test")
	}

	fn ctx_with(values: &[&str]) -> ParamContext {
		ParamContext::new(
			HashMap::new(),
			values.iter().map(|v| v.to_string()).collect(),
		)
	}

	#[test]
	fn test_no_params_handler() {
		let handler = NoParamsHandler::new(test_view);
		let result = handler.handle(&ctx_with(&[]));
		assert_eq!(result.unwrap().render_to_string(), "Test");
	}

	#[test]
	fn test_with_param_handler() {
		let handler =
			WithParamHandler::new(|Path(id): Path<String>| View::text(format!("id: {}", id)));

		let result = handler.handle(&ctx_with(&["apple"]));
		assert_eq!(result.unwrap().render_to_string(), "id: apple");
	}

	#[test]
	fn test_with_param_handler_parse_error() {
		let handler = WithParamHandler::new(|Path(_id): Path<i64>| View::empty());

		let result = handler.handle(&ctx_with(&["not_a_number"]));
		assert!(matches!(
			result,
			Err(RouterError::PathExtraction(PathError::Parse { .. }))
		));
	}

	#[test]
	fn test_with_param_handler_count_mismatch() {
		let handler = WithParamHandler::new(|Path(_id): Path<String>| View::empty());

		let result = handler.handle(&ctx_with(&[]));
		assert!(matches!(
			result,
			Err(RouterError::PathExtraction(PathError::CountMismatch { .. }))
		));
	}

	#[test]
	fn test_helper_constructors() {
		let no_params: Arc<dyn RouteHandler> = no_params_handler(test_view);
		assert!(no_params.handle(&ctx_with(&[])).is_ok());

		let with_param: Arc<dyn RouteHandler> =
			with_param_handler(|Path(id): Path<String>| View::text(id));
		assert!(with_param.handle(&ctx_with(&["x"])).is_ok());
	}
}
