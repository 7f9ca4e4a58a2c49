//! Order DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to place an order. The owner is the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to change an order. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
}
