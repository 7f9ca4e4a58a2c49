//! # Skein Core
//!
//! Core types, traits, and error definitions for the Skein storefront.
//! Every other crate in the workspace builds on the abstractions here:
//! the error taxonomy, the [`Resource`] trait that parameterizes the
//! cache-aside engine, and the domain entities it stores.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

pub use rust_decimal::Decimal;
