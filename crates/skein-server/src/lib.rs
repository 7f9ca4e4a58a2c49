//! # Skein Server Library
//!
//! Startup wiring for the Skein storefront: telemetry, the assembled
//! application and its graceful shutdown.

pub mod app;
pub mod telemetry;

pub use app::Application;
