//! # Skein REST
//!
//! REST API layer using Axum for the Skein storefront.
//!
//! Every request runs through the same pipeline: correlation id and tracing
//! span, request metrics, CORS (OPTIONS stops here), timeout, then for
//! protected routes bearer authentication followed by the admin gate, and
//! finally the handler. Handler errors become JSON [`skein_core::ErrorResponse`]
//! bodies carrying the correlation id.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
