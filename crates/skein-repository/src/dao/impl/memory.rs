//! In-memory DAO implementation.
//!
//! One generic store serves every resource type; the resource-specific
//! queries are implemented per concrete type below.

use crate::dao::{
    CategoryDao, CommentDao, OrderDao, ProductDao, ProductFilter, RecordDao, UserDao,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use skein_core::{
    Category, Comment, Order, Page, PageRequest, Product, RecordId, Resource, SkeinResult, User,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

/// Map-backed DAO with auto-incrementing ids.
#[derive(Debug)]
pub struct MemoryDao<T> {
    records: RwLock<BTreeMap<RecordId, T>>,
    next_id: AtomicI64,
    lookups: AtomicUsize,
}

impl<T: Resource> MemoryDao<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of primary-key reads served so far.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records
            .read()
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }
}

impl<T: Resource> Default for MemoryDao<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> RecordDao<T> for MemoryDao<T> {
    async fn insert(&self, record: &T) -> SkeinResult<T> {
        let mut stored = record.clone();
        stored.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.records.write().insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: RecordId) -> SkeinResult<Option<T>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.read().get(&id).cloned())
    }

    async fn find_all(&self) -> SkeinResult<Vec<T>> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn update(&self, record: &T) -> SkeinResult<Option<T>> {
        let mut records = self.records.write();
        match records.get_mut(&record.id()) {
            Some(existing) => {
                *existing = record.clone();
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: RecordId) -> SkeinResult<bool> {
        Ok(self.records.write().remove(&id).is_some())
    }
}

#[async_trait]
impl UserDao for MemoryDao<User> {
    async fn find_by_email(&self, email: &str) -> SkeinResult<Option<User>> {
        Ok(self
            .filtered(|user| user.email.eq_ignore_ascii_case(email))
            .into_iter()
            .next())
    }
}

impl CategoryDao for MemoryDao<Category> {}

#[async_trait]
impl ProductDao for MemoryDao<Product> {
    async fn find_by_filter(&self, filter: &ProductFilter) -> SkeinResult<Vec<Product>> {
        Ok(self.filtered(|product| filter.matches(product)))
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> SkeinResult<Page<Product>> {
        let matches = self.filtered(|product| filter.matches(product));
        let total = matches.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matches
            .into_iter()
            .skip(offset)
            .take(page.limit as usize)
            .collect();
        Ok(Page::new(items, page, total))
    }
}

#[async_trait]
impl OrderDao for MemoryDao<Order> {
    async fn list_by_user(&self, user_id: RecordId) -> SkeinResult<Vec<Order>> {
        Ok(self.filtered(|order| order.user_id == user_id))
    }
}

#[async_trait]
impl CommentDao for MemoryDao<Comment> {
    async fn list_by_product(&self, product_id: RecordId) -> SkeinResult<Vec<Comment>> {
        Ok(self.filtered(|comment| comment.product_id == product_id))
    }

    async fn list_by_user(&self, user_id: RecordId) -> SkeinResult<Vec<Comment>> {
        Ok(self.filtered(|comment| comment.user_id == user_id))
    }
}
