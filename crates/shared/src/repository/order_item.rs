use crate::{
    abstract_trait::OrderItemRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderItemRequest, UpdateOrderItemRequest},
    errors::RepositoryError,
    model::OrderItem,
    repository::order::{insert_item, settle_total},
};
use async_trait::async_trait;
use rust_decimal::Decimal;

pub struct OrderItemRepository {
    db: ConnectionPool,
}

impl OrderItemRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemRepositoryTrait for OrderItemRepository {
    async fn find_all(&self) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, menu_item_id, quantity, unit_price, subtotal
            FROM order_items
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, menu_item_id, quantity, unit_price, subtotal
            FROM order_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, menu_item_id, quantity, unit_price, subtotal
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn find_by_menu_item_id(
        &self,
        menu_item_id: i64,
    ) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, menu_item_id, quantity, unit_price, subtotal
            FROM order_items
            WHERE menu_item_id = $1
            ORDER BY id
            "#,
        )
        .bind(menu_item_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn create(
        &self,
        order_id: i64,
        input: &CreateOrderItemRequest,
    ) -> Result<OrderItem, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let item = insert_item(
            &mut *tx,
            order_id,
            input.menu_item_id,
            input.quantity,
            input.unit_price,
        )
        .await?;

        settle_total(&mut *tx, order_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn update(
        &self,
        id: i64,
        input: &UpdateOrderItemRequest,
    ) -> Result<OrderItem, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let subtotal = input.unit_price * Decimal::from(input.quantity);

        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            UPDATE order_items
            SET menu_item_id = $2, quantity = $3, unit_price = $4, subtotal = $5
            WHERE id = $1
            RETURNING id, order_id, menu_item_id, quantity, unit_price, subtotal
            "#,
        )
        .bind(id)
        .bind(input.menu_item_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(subtotal)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        settle_total(&mut *tx, item.order_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order_id = sqlx::query_scalar::<_, i64>(
            "DELETE FROM order_items WHERE id = $1 RETURNING order_id",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        settle_total(&mut *tx, order_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn delete_by_order_id(&self, order_id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        settle_total(&mut *tx, order_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(())
    }
}
