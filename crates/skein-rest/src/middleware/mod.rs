//! Request pipeline middleware.

mod auth;
mod cors;
mod logging;
mod request_context;

pub use auth::*;
pub use cors::*;
pub use logging::*;
pub use request_context::*;
