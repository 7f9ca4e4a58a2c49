//! User data access.

use super::RecordDao;
use async_trait::async_trait;
use skein_core::{SkeinResult, User};

#[async_trait]
pub trait UserDao: RecordDao<User> {
    /// Finds a user by email, ignoring case. Never cached.
    async fn find_by_email(&self, email: &str) -> SkeinResult<Option<User>>;
}
