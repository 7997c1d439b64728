use crate::{
    abstract_trait::MenuItemRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateMenuItemRequest, UpdateMenuItemRequest},
    errors::RepositoryError,
    model::MenuItem,
};
use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::info;

pub struct MenuItemRepository {
    db: ConnectionPool,
}

impl MenuItemRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn replace_allergens(
        conn: &mut PgConnection,
        menu_item_id: i64,
        allergen_ids: &[i64],
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM menu_item_allergens WHERE menu_item_id = $1")
            .bind(menu_item_id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        for allergen_id in allergen_ids {
            sqlx::query(
                "INSERT INTO menu_item_allergens (menu_item_id, allergen_id) VALUES ($1, $2)",
            )
            .bind(menu_item_id)
            .bind(allergen_id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;
        }

        Ok(())
    }
}

#[async_trait]
impl MenuItemRepositoryTrait for MenuItemRepository {
    async fn find_all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, description, price, category
            FROM menu_items
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, description, price, category
            FROM menu_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, description, price, category
            FROM menu_items
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM menu_items
                WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }

    async fn create(
        &self,
        input: &CreateMenuItemRequest,
        category: &str,
    ) -> Result<MenuItem, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            INSERT INTO menu_items (name, description, price, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, category
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(category)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        Self::replace_allergens(&mut *tx, item.id, &input.allergen_ids).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created menu item {} ({})", item.id, item.name);
        Ok(item)
    }

    async fn update(
        &self,
        id: i64,
        input: &UpdateMenuItemRequest,
        category: &str,
    ) -> Result<MenuItem, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            UPDATE menu_items
            SET name = $2, description = $3, price = $4, category = $5
            WHERE id = $1
            RETURNING id, name, description, price, category
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(category)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        Self::replace_allergens(&mut *tx, item.id, &input.allergen_ids).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM menu_item_allergens WHERE menu_item_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn allergens_of(&self, menu_item_id: i64) -> Result<Vec<i64>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT allergen_id
            FROM menu_item_allergens
            WHERE menu_item_id = $1
            ORDER BY allergen_id
            "#,
        )
        .bind(menu_item_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(ids)
    }
}
