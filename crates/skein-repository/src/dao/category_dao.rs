//! Category data access.

use super::RecordDao;
use skein_core::Category;

/// Categories need nothing beyond primary-key access.
pub trait CategoryDao: RecordDao<Category> {}
