//! # Skein Security
//!
//! Credential and token handling for the Skein storefront: Argon2 password
//! hashing, HMAC-signed bearer tokens, and role checks over the
//! authenticated principal.

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::*;
pub use password::*;
pub use rbac::*;
