//! Category service implementation.

use crate::category_service::CategoryService;
use crate::crud_service::CrudService;
use crate::dto::CategoryRequest;
use crate::rules;
use async_trait::async_trait;
use skein_core::{Category, RecordId, SkeinResult};
use skein_repository::{CategoryDao, CategoryRepository};

pub struct CategoryServiceImpl {
    categories: CrudService<Category, dyn CategoryDao>,
}

impl CategoryServiceImpl {
    pub fn new(repository: CategoryRepository) -> Self {
        Self {
            categories: CrudService::new(repository, rules::validate_category),
        }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn list_categories(&self) -> SkeinResult<Vec<Category>> {
        self.categories.list().await
    }

    async fn get_category(&self, id: RecordId) -> SkeinResult<Category> {
        self.categories.get(id).await
    }

    async fn create_category(&self, request: CategoryRequest) -> SkeinResult<Category> {
        self.categories.create(request.into_category()).await
    }

    async fn update_category(
        &self,
        id: RecordId,
        request: CategoryRequest,
    ) -> SkeinResult<Category> {
        let existing = self.categories.get(id).await?;
        self.categories.update(request.apply_to(existing)).await
    }

    async fn delete_category(&self, id: RecordId) -> SkeinResult<()> {
        self.categories.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn request(name: &str) -> CategoryRequest {
        CategoryRequest {
            name: name.to_string(),
            category_type: Some("material".to_string()),
        }
    }

    #[tokio::test]
    async fn test_category_lifecycle() {
        let service = CategoryServiceImpl::new(test_support::repositories().categories);

        let created = service.create_category(request("Yarn")).await.unwrap();
        assert_eq!(service.get_category(created.id).await.unwrap().name, "Yarn");

        let updated = service
            .update_category(created.id, request("Yarns"))
            .await
            .unwrap();
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(service.get_category(created.id).await.unwrap().name, "Yarns");
        assert_eq!(service.list_categories().await.unwrap().len(), 1);

        service.delete_category(created.id).await.unwrap();
        assert!(service.get_category(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let service = CategoryServiceImpl::new(test_support::repositories().categories);
        let err = service.create_category(request(" ")).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
