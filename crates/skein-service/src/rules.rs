//! Per-resource validation rules, plugged into [`crate::CrudService`].

use rust_decimal::Decimal;
use skein_core::{Category, Comment, Order, Product, ProductType, SkeinError, SkeinResult, User};
use validator::ValidateEmail;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Largest amount a `NUMERIC(12,2)` money column holds.
const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

fn require(present: bool, message: &str) -> SkeinResult<()> {
    if present {
        Ok(())
    } else {
        Err(SkeinError::validation(message))
    }
}

/// Money must be positive, fit the column, and carry at most two decimals.
fn check_amount(amount: Decimal, field: &str) -> SkeinResult<()> {
    require(amount > Decimal::ZERO, &format!("{field} must be greater than 0"))?;
    require(amount <= MAX_AMOUNT, &format!("{field} must not exceed {MAX_AMOUNT}"))?;
    require(
        amount.normalize().scale() <= 2,
        &format!("{field} must have at most 2 decimal places"),
    )
}

pub fn validate_user(user: &User) -> SkeinResult<()> {
    require(user.email.validate_email(), "email must be a valid address")?;
    require(!user.password_hash.is_empty(), "password is required")
}

pub fn validate_category(category: &Category) -> SkeinResult<()> {
    require(!category.name.trim().is_empty(), "name is required")
}

/// Checks the common product fields, then the fields its `type` requires.
pub fn validate_product(product: &Product) -> SkeinResult<()> {
    require(!product.name.trim().is_empty(), "name is required")?;
    check_amount(product.price, "price")?;
    require(product.category_id > 0, "category_id must be greater than 0")?;

    let kind: ProductType = product.product_type.parse().map_err(SkeinError::Validation)?;
    let has_composition = !is_blank(product.composition.as_deref());
    match kind {
        ProductType::Yarn => {
            require(has_composition, "composition is required for yarn")?;
            require(!is_blank(product.origin.as_deref()), "origin is required for yarn")?;
            require(
                product.length.is_some_and(|l| l > 0),
                "length is required for yarn and must be greater than 0",
            )
        }
        ProductType::Garment => {
            require(has_composition, "composition is required for garment")?;
            require(!is_blank(product.size.as_deref()), "size is required for garment")?;
            require(
                product.garment_length.is_some_and(|l| l > 0),
                "garment_length is required for garment and must be greater than 0",
            )
        }
    }
}

pub fn validate_order(order: &Order) -> SkeinResult<()> {
    require(order.user_id > 0, "user_id must be greater than 0")?;
    check_amount(order.total, "total")?;
    require(!order.status.trim().is_empty(), "status is required")
}

pub fn validate_comment(comment: &Comment) -> SkeinResult<()> {
    require(comment.product_id > 0, "product_id must be greater than 0")?;
    require(comment.user_id > 0, "user_id must be greater than 0")?;
    require(!comment.text.trim().is_empty(), "text is required")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn yarn() -> Product {
        Product {
            id: 0,
            name: "Merino".to_string(),
            description: String::new(),
            price: Decimal::new(1_250, 2),
            category_id: 1,
            product_type: "yarn".to_string(),
            composition: Some("100% merino".to_string()),
            origin: Some("Peru".to_string()),
            length: Some(200),
            size: None,
            garment_length: None,
            color: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn message(result: SkeinResult<()>) -> String {
        match result.unwrap_err() {
            SkeinError::Validation(message) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_yarn() {
        assert!(validate_product(&yarn()).is_ok());
    }

    #[test]
    fn test_yarn_without_composition() {
        let mut product = yarn();
        product.composition = None;
        assert_eq!(message(validate_product(&product)), "composition is required for yarn");
    }

    #[test]
    fn test_yarn_fields_do_not_satisfy_garment() {
        let mut product = yarn();
        product.product_type = "garment".to_string();
        assert_eq!(message(validate_product(&product)), "size is required for garment");

        product.size = Some("M".to_string());
        assert!(message(validate_product(&product)).starts_with("garment_length"));

        product.garment_length = Some(60);
        assert!(validate_product(&product).is_ok());
    }

    #[test]
    fn test_common_fields() {
        let mut product = yarn();
        product.price = Decimal::ZERO;
        assert_eq!(message(validate_product(&product)), "price must be greater than 0");

        let mut product = yarn();
        product.category_id = 0;
        assert!(validate_product(&product).is_err());

        let mut product = yarn();
        product.name = " ".to_string();
        assert_eq!(message(validate_product(&product)), "name is required");
    }

    #[test]
    fn test_price_must_fit_the_money_column() {
        assert_eq!(MAX_AMOUNT.to_string(), "9999999999.99");

        let mut product = yarn();
        product.price = MAX_AMOUNT;
        assert!(validate_product(&product).is_ok());

        product.price = Decimal::new(10_000_000_000, 0);
        assert_eq!(
            message(validate_product(&product)),
            "price must not exceed 9999999999.99"
        );

        product.price = Decimal::new(12_505, 3);
        assert_eq!(
            message(validate_product(&product)),
            "price must have at most 2 decimal places"
        );

        product.price = Decimal::new(12_500, 3);
        assert!(validate_product(&product).is_ok());
    }

    #[test]
    fn test_unknown_type() {
        let mut product = yarn();
        product.product_type = "socks".to_string();
        assert_eq!(
            message(validate_product(&product)),
            "type must be \"yarn\" or \"garment\", got \"socks\""
        );
    }

    #[test]
    fn test_blank_variant_field_counts_as_missing() {
        let mut product = yarn();
        product.origin = Some("   ".to_string());
        assert_eq!(message(validate_product(&product)), "origin is required for yarn");
    }

    #[test]
    fn test_order_rules() {
        let order = Order {
            id: 0,
            user_id: 3,
            total: Decimal::new(2_500, 2),
            status: Order::DEFAULT_STATUS.to_string(),
            created_at: Utc::now(),
        };
        assert!(validate_order(&order).is_ok());
        assert!(validate_order(&Order { total: Decimal::new(-1, 0), ..order.clone() }).is_err());
        assert!(validate_order(&Order { status: String::new(), ..order.clone() }).is_err());

        let huge = Order { total: Decimal::new(12_345_678_901, 0), ..order.clone() };
        assert_eq!(message(validate_order(&huge)), "total must not exceed 9999999999.99");
        let fractional = Order { total: Decimal::new(10_001, 3), ..order };
        assert_eq!(
            message(validate_order(&fractional)),
            "total must have at most 2 decimal places"
        );
    }

    #[test]
    fn test_comment_rules() {
        let comment = Comment {
            id: 0,
            product_id: 1,
            user_id: 2,
            text: "Lovely".to_string(),
            created_at: Utc::now(),
        };
        assert!(validate_comment(&comment).is_ok());
        assert!(validate_comment(&Comment { text: "  ".to_string(), ..comment.clone() }).is_err());
        assert!(validate_comment(&Comment { product_id: 0, ..comment }).is_err());
    }
}
