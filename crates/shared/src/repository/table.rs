use crate::{
    abstract_trait::TableRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateRestaurantTableRequest, UpdateRestaurantTableRequest},
    errors::RepositoryError,
    model::RestaurantTable,
};
use async_trait::async_trait;
use tracing::info;

const TABLE_COLUMNS: &str = "id, number, table_state, current_order_id";

pub struct TableRepository {
    db: ConnectionPool,
}

impl TableRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TableRepositoryTrait for TableRepository {
    async fn find_all(&self) -> Result<Vec<RestaurantTable>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let tables = sqlx::query_as::<_, RestaurantTable>(&format!(
            "SELECT {TABLE_COLUMNS} FROM restaurant_tables ORDER BY number"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(tables)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<RestaurantTable>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let table = sqlx::query_as::<_, RestaurantTable>(&format!(
            "SELECT {TABLE_COLUMNS} FROM restaurant_tables WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(table)
    }

    async fn find_by_number(
        &self,
        number: i32,
    ) -> Result<Option<RestaurantTable>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let table = sqlx::query_as::<_, RestaurantTable>(&format!(
            "SELECT {TABLE_COLUMNS} FROM restaurant_tables WHERE number = $1"
        ))
        .bind(number)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(table)
    }

    async fn find_by_state(&self, state: &str) -> Result<Vec<RestaurantTable>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let tables = sqlx::query_as::<_, RestaurantTable>(&format!(
            "SELECT {TABLE_COLUMNS} FROM restaurant_tables WHERE table_state = $1 ORDER BY number"
        ))
        .bind(state)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(tables)
    }

    async fn exists_by_number(
        &self,
        number: i32,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM restaurant_tables
                WHERE number = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(number)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }

    async fn create(
        &self,
        input: &CreateRestaurantTableRequest,
        state: &str,
    ) -> Result<RestaurantTable, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let table = sqlx::query_as::<_, RestaurantTable>(&format!(
            r#"
            INSERT INTO restaurant_tables (number, table_state)
            VALUES ($1, $2)
            RETURNING {TABLE_COLUMNS}
            "#
        ))
        .bind(input.number)
        .bind(state)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        info!("✅ Created table {} (number {})", table.id, table.number);
        Ok(table)
    }

    async fn update(
        &self,
        id: i64,
        input: &UpdateRestaurantTableRequest,
        state: &str,
    ) -> Result<RestaurantTable, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let table = sqlx::query_as::<_, RestaurantTable>(&format!(
            r#"
            UPDATE restaurant_tables
            SET number = $2, table_state = $3, current_order_id = $4
            WHERE id = $1
            RETURNING {TABLE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(input.number)
        .bind(state)
        .bind(input.current_order_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(table)
    }

    async fn update_state(
        &self,
        id: i64,
        state: &str,
        clear_order: bool,
    ) -> Result<RestaurantTable, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let table = sqlx::query_as::<_, RestaurantTable>(&format!(
            r#"
            UPDATE restaurant_tables
            SET table_state = $2,
                current_order_id = CASE WHEN $3 THEN NULL ELSE current_order_id END
            WHERE id = $1
            RETURNING {TABLE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(state)
        .bind(clear_order)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(table)
    }

    async fn assign_order(
        &self,
        id: i64,
        order_id: i64,
        state: &str,
    ) -> Result<RestaurantTable, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let table = sqlx::query_as::<_, RestaurantTable>(&format!(
            r#"
            UPDATE restaurant_tables
            SET current_order_id = $2, table_state = $3
            WHERE id = $1
            RETURNING {TABLE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(order_id)
        .bind(state)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(table)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM restaurant_tables WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}
