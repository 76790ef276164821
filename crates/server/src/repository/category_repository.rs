use crate::entity::category;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use trivia_core::domain::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub kind: String,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<CategoryRecord>>;
    async fn find_by_id(&self, category_id: CategoryId) -> Result<Option<CategoryRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: category::Model) -> CategoryRecord {
        CategoryRecord {
            id: CategoryId::new(model.id),
            kind: model.kind,
        }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn list_all(&self) -> Result<Vec<CategoryRecord>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn find_by_id(&self, category_id: CategoryId) -> Result<Option<CategoryRecord>> {
        let model = category::Entity::find_by_id(category_id.into_inner())
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    #[tokio::test]
    async fn seeded_categories_are_listed_in_id_order() {
        let repo = SeaOrmCategoryRepository::new(connect_in_memory().await);

        let kinds: Vec<String> = repo
            .list_all()
            .await
            .expect("list categories")
            .into_iter()
            .map(|c| c.kind)
            .collect();

        assert_eq!(
            kinds,
            ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        );
    }

    #[tokio::test]
    async fn unknown_category_is_none() {
        let repo = SeaOrmCategoryRepository::new(connect_in_memory().await);

        let history = repo
            .find_by_id(CategoryId::new(4))
            .await
            .expect("lookup history");
        let missing = repo
            .find_by_id(CategoryId::new(1000))
            .await
            .expect("lookup missing");

        assert_eq!(history.map(|c| c.kind).as_deref(), Some("History"));
        assert!(missing.is_none());
    }
}
