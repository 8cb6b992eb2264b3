//! Page views for the fruit-posts app.
//!
//! Each page is a plain function producing a [`View`](crate::component::View)
//! tree; the detail page additionally takes the `:id` path parameter. The
//! route table in [`crate::routes`] binds these to URLs.

mod about;
mod create_post;
mod home;
mod not_found;
mod post_detail;

pub use about::about;
pub use create_post::create_post;
pub use home::home;
pub use not_found::not_found;
pub use post_detail::post_detail;
