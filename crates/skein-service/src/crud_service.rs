//! Generic CRUD service over the cache-aside repository.

use skein_core::{RecordId, Resource, ResultExt, SkeinResult};
use skein_repository::{CachedRepository, RecordDao};
use std::sync::Arc;
use tracing::{debug, info};

/// Business validation applied to a record before it is written.
pub trait EntityValidator<T>: Send + Sync {
    fn validate(&self, record: &T) -> SkeinResult<()>;
}

impl<T, F> EntityValidator<T> for F
where
    F: Fn(&T) -> SkeinResult<()> + Send + Sync,
{
    fn validate(&self, record: &T) -> SkeinResult<()> {
        self(record)
    }
}

/// One CRUD service shape for every resource type.
///
/// Writes are validated first; every failure from the repository comes back
/// wrapped with the business operation that was attempted, so callers can
/// still ask [`skein_core::SkeinError::is_not_found`] on the result.
pub struct CrudService<T, D: ?Sized> {
    repository: CachedRepository<T, D>,
    validator: Arc<dyn EntityValidator<T>>,
}

impl<T, D> CrudService<T, D>
where
    T: Resource,
    D: ?Sized + RecordDao<T>,
{
    pub fn new(
        repository: CachedRepository<T, D>,
        validator: impl EntityValidator<T> + 'static,
    ) -> Self {
        Self {
            repository,
            validator: Arc::new(validator),
        }
    }

    /// Returns the repository for resource-specific queries.
    #[must_use]
    pub fn repository(&self) -> &CachedRepository<T, D> {
        &self.repository
    }

    /// Runs the validator without writing anything.
    pub fn validate(&self, record: &T) -> SkeinResult<()> {
        self.validator.validate(record)
    }

    pub async fn get(&self, id: RecordId) -> SkeinResult<T> {
        debug!("Getting {} {}", T::NAME, id);

        self.repository
            .get(id)
            .await
            .with_context(|| format!("failed to load {} {id}", T::NAME))
    }

    pub async fn list(&self) -> SkeinResult<Vec<T>> {
        debug!("Listing {}s", T::NAME);

        let records = self
            .repository
            .list()
            .await
            .with_context(|| format!("failed to list {}s", T::NAME))?;

        debug!("Listed {} {}s", records.len(), T::NAME);
        Ok(records)
    }

    pub async fn create(&self, record: T) -> SkeinResult<T> {
        debug!("Creating {}", T::NAME);

        self.validator.validate(&record)?;
        let created = self
            .repository
            .create(&record)
            .await
            .with_context(|| format!("failed to create {}", T::NAME))?;

        info!("{} created: {}", T::NAME, created.id());
        Ok(created)
    }

    pub async fn update(&self, record: T) -> SkeinResult<T> {
        let id = record.id();
        debug!("Updating {} {}", T::NAME, id);

        self.validator.validate(&record)?;
        let updated = self
            .repository
            .update(&record)
            .await
            .with_context(|| format!("failed to update {} {id}", T::NAME))?;

        info!("{} updated: {}", T::NAME, id);
        Ok(updated)
    }

    pub async fn delete(&self, id: RecordId) -> SkeinResult<()> {
        debug!("Deleting {} {}", T::NAME, id);

        self.repository
            .delete(id)
            .await
            .with_context(|| format!("failed to delete {} {id}", T::NAME))?;

        info!("{} deleted: {}", T::NAME, id);
        Ok(())
    }
}

impl<T, D: ?Sized> Clone for CrudService<T, D> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            validator: Arc::clone(&self.validator),
        }
    }
}
