//! Custom Axum extractors.
//!
//! Each one turns its failure into an [`AppError`](crate::responses::AppError)
//! so clients always get the JSON error body.

mod auth;
mod params;

pub use auth::*;
pub use params::*;
