//! Integration tests for the PostgreSQL DAOs.
//!
//! These run against a real Postgres started with testcontainers and need a
//! Docker daemon: `cargo test -p skein-repository -- --ignored`.

mod common;

use chrono::Utc;
use common::TestDatabase;
use skein_core::{Category, Comment, Decimal, Order, PageRequest, Product, User, UserRole};
use skein_repository::{
    CommentDao, OrderDao, PgCategoryDaoImpl, PgCommentDaoImpl, PgOrderDaoImpl,
    PgProductDaoImpl, PgUserDaoImpl, ProductDao, ProductFilter, RecordDao, UserDao,
};
use std::str::FromStr;

fn user(email: &str) -> User {
    User::new(
        email.to_string(),
        "Test User".to_string(),
        "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        UserRole::User,
    )
}

fn category(name: &str) -> Category {
    Category {
        id: 0,
        name: name.to_string(),
        category_type: None,
        created_at: Utc::now(),
    }
}

fn yarn(name: &str, category_id: i64, color: &str) -> Product {
    Product {
        id: 0,
        name: name.to_string(),
        description: "Soft".to_string(),
        price: Decimal::from_str("12.50").unwrap(),
        category_id,
        product_type: "yarn".to_string(),
        composition: Some("100% merino".to_string()),
        origin: Some("Peru".to_string()),
        length: Some(200),
        size: None,
        garment_length: None,
        color: Some(color.to_string()),
        image_url: None,
        created_at: Utc::now(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_user_insert_find_update_delete() {
    let db = TestDatabase::new().await;
    let dao = PgUserDaoImpl::new(db.pool());

    let created = dao.insert(&user("a@x.com")).await.expect("insert");
    assert!(created.id > 0);

    let found = dao
        .find_by_email("A@X.COM")
        .await
        .expect("query")
        .expect("user not found");
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, UserRole::User);

    let mut promoted = found.clone();
    promoted.role = UserRole::Admin;
    let updated = dao.update(&promoted).await.expect("update").expect("row");
    assert_eq!(updated.role, UserRole::Admin);

    assert!(dao.delete(created.id).await.expect("delete"));
    assert!(!dao.delete(created.id).await.expect("delete"));
    assert!(dao.find_by_id(created.id).await.expect("query").is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_email_is_a_conflict() {
    let db = TestDatabase::new().await;
    let dao = PgUserDaoImpl::new(db.pool());

    dao.insert(&user("dup@x.com")).await.expect("insert");
    let err = dao.insert(&user("DUP@x.com")).await.unwrap_err();
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_of_missing_row_returns_none() {
    let db = TestDatabase::new().await;
    let dao = PgCategoryDaoImpl::new(db.pool());

    let mut ghost = category("Ghost");
    ghost.id = 9_999;
    assert!(dao.update(&ghost).await.expect("update").is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_product_price_keeps_decimal_precision() {
    let db = TestDatabase::new().await;
    let categories = PgCategoryDaoImpl::new(db.pool());
    let products = PgProductDaoImpl::new(db.pool());

    let cat = categories.insert(&category("Yarn")).await.expect("insert");
    let mut item = yarn("Merino", cat.id, "red");
    item.price = Decimal::from_str("0.10").unwrap() + Decimal::from_str("0.20").unwrap();

    let created = products.insert(&item).await.expect("insert");
    let found = products
        .find_by_id(created.id)
        .await
        .expect("query")
        .expect("row");
    assert_eq!(found.price, Decimal::from_str("0.30").unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_product_search() {
    let db = TestDatabase::new().await;
    let categories = PgCategoryDaoImpl::new(db.pool());
    let products = PgProductDaoImpl::new(db.pool());

    let yarns = categories.insert(&category("Yarn")).await.expect("insert");
    let other = categories.insert(&category("Other")).await.expect("insert");
    products.insert(&yarn("Merino 100%", yarns.id, "Red")).await.expect("insert");
    products.insert(&yarn("Merino Lace", yarns.id, "blue")).await.expect("insert");
    products.insert(&yarn("Alpaca", other.id, "red")).await.expect("insert");

    let filter = ProductFilter {
        name: Some("merino".to_string()),
        ..Default::default()
    };
    let page = products.search(&filter, PageRequest::first()).await.expect("search");
    assert_eq!(page.total_count, 2);

    let filter = ProductFilter {
        name: Some("100%".to_string()),
        ..Default::default()
    };
    let page = products.search(&filter, PageRequest::first()).await.expect("search");
    assert_eq!(page.total_count, 1);

    let filter = ProductFilter {
        color: Some("RED".to_string()),
        category_id: Some(other.id),
        ..Default::default()
    };
    let page = products.search(&filter, PageRequest::first()).await.expect("search");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Alpaca");

    let page = products
        .search(&ProductFilter::default(), PageRequest::new(2, 2).unwrap())
        .await
        .expect("search");
    assert_eq!(page.total_count, 3);
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_orders_and_comments_by_owner() {
    let db = TestDatabase::new().await;
    let users = PgUserDaoImpl::new(db.pool());
    let categories = PgCategoryDaoImpl::new(db.pool());
    let products = PgProductDaoImpl::new(db.pool());
    let orders = PgOrderDaoImpl::new(db.pool());
    let comments = PgCommentDaoImpl::new(db.pool());

    let ann = users.insert(&user("ann@x.com")).await.expect("insert");
    let bob = users.insert(&user("bob@x.com")).await.expect("insert");
    let cat = categories.insert(&category("Yarn")).await.expect("insert");
    let item = products.insert(&yarn("Merino", cat.id, "red")).await.expect("insert");

    for owner in [ann.id, ann.id, bob.id] {
        orders
            .insert(&Order {
                id: 0,
                user_id: owner,
                total: Decimal::from_str("25.00").unwrap(),
                status: Order::DEFAULT_STATUS.to_string(),
                created_at: Utc::now(),
            })
            .await
            .expect("insert");
    }
    assert_eq!(orders.list_by_user(ann.id).await.expect("list").len(), 2);
    assert_eq!(orders.find_all().await.expect("list").len(), 3);

    let comment = comments
        .insert(&Comment {
            id: 0,
            product_id: item.id,
            user_id: bob.id,
            text: "Lovely".to_string(),
            created_at: Utc::now(),
        })
        .await
        .expect("insert");
    let listed = comments.list_by_product(item.id).await.expect("list");
    assert_eq!(listed, vec![comment.clone()]);
    assert_eq!(comments.list_by_user(bob.id).await.expect("list"), vec![comment]);
    assert!(comments.list_by_user(ann.id).await.expect("list").is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_deleting_an_owner_cascades_to_dependents() {
    let db = TestDatabase::new().await;
    let users = PgUserDaoImpl::new(db.pool());
    let categories = PgCategoryDaoImpl::new(db.pool());
    let products = PgProductDaoImpl::new(db.pool());
    let comments = PgCommentDaoImpl::new(db.pool());

    let ann = users.insert(&user("ann@x.com")).await.expect("insert");
    let cat = categories.insert(&category("Yarn")).await.expect("insert");
    let item = products.insert(&yarn("Merino", cat.id, "red")).await.expect("insert");
    let comment = comments
        .insert(&Comment {
            id: 0,
            product_id: item.id,
            user_id: ann.id,
            text: "Lovely".to_string(),
            created_at: Utc::now(),
        })
        .await
        .expect("insert");

    assert!(products.delete(item.id).await.expect("delete"));
    assert!(comments.find_by_id(comment.id).await.expect("query").is_none());
}
