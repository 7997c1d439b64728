use crate::{
    abstract_trait::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::RepositoryError,
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use tracing::{error, info};

const ORDER_COLUMNS: &str =
    "id, table_id, user_id, order_state, total_amount, customer_count, created_at, updated_at";

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn find_by_table_id(&self, table_id: i64) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE table_id = $1 ORDER BY id"
        ))
        .bind(table_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_by_created_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE created_at BETWEEN $1 AND $2 ORDER BY id"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn items_of(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError> {
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
}

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Re-derives `total_amount` from the surviving item rows. An order with no
/// items settles at zero.
pub(crate) async fn settle_total(
    conn: &mut PgConnection,
    order_id: i64,
) -> Result<Order, RepositoryError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        r#"
        UPDATE orders
        SET total_amount = COALESCE(
                (SELECT SUM(subtotal) FROM order_items WHERE order_id = $1), 0),
            updated_at = current_timestamp
        WHERE id = $1
        RETURNING {ORDER_COLUMNS}
        "#
    ))
    .bind(order_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(RepositoryError::from)?;

    Ok(order)
}

pub(crate) async fn insert_item(
    conn: &mut PgConnection,
    order_id: i64,
    menu_item_id: i64,
    quantity: i32,
    unit_price: Decimal,
) -> Result<OrderItem, RepositoryError> {
    let subtotal = unit_price * Decimal::from(quantity);

    let item = sqlx::query_as::<_, OrderItem>(
        r#"
        INSERT INTO order_items (order_id, menu_item_id, quantity, unit_price, subtotal)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, order_id, menu_item_id, quantity, unit_price, subtotal
        "#,
    )
    .bind(order_id)
    .bind(menu_item_id)
    .bind(quantity)
    .bind(unit_price)
    .bind(subtotal)
    .fetch_one(&mut *conn)
    .await
    .map_err(RepositoryError::from)?;

    Ok(item)
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_with_items(
        &self,
        input: &CreateOrderRequest,
        state: &str,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders
                (table_id, user_id, order_state, total_amount, customer_count,
                 created_at, updated_at)
            VALUES ($1, $2, $3, 0, $4, current_timestamp, current_timestamp)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(input.table_id)
        .bind(input.user_id)
        .bind(state)
        .bind(input.customer_count)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for table {}: {:?}",
                input.table_id, err
            );
            RepositoryError::from(err)
        })?;

        let mut items = Vec::with_capacity(input.order_items.len());
        for item in &input.order_items {
            items.push(
                insert_item(
                    &mut *tx,
                    order.id,
                    item.menu_item_id,
                    item.quantity,
                    item.unit_price,
                )
                .await?,
            );
        }

        let order = settle_total(&mut *tx, order.id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order {} for table {} with {} item(s)",
            order.id,
            order.table_id,
            items.len()
        );
        Ok((order, items))
    }

    async fn update_with_items(
        &self,
        id: i64,
        input: &UpdateOrderRequest,
        state: &str,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            UPDATE orders
            SET table_id = $2, order_state = $3, customer_count = $4,
                updated_at = current_timestamp
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(input.table_id)
        .bind(state)
        .bind(input.customer_count)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if !input.order_items.is_empty() {
            sqlx::query("DELETE FROM order_items WHERE order_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(RepositoryError::from)?;

            for item in &input.order_items {
                insert_item(
                    &mut *tx,
                    id,
                    item.menu_item_id,
                    item.quantity,
                    item.unit_price,
                )
                .await?;
            }
        }

        let order = settle_total(&mut *tx, id).await?;

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, menu_item_id, quantity, unit_price, subtotal
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok((order, items))
    }

    async fn update_state(&self, id: i64, state: &str) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET order_state = $2, updated_at = current_timestamp
            WHERE id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(state)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn recalculate_total(&self, id: i64) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        settle_total(&mut *conn, id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // order_items go with the order via ON DELETE CASCADE; the table
        // reference has to be detached by hand.
        sqlx::query("UPDATE restaurant_tables SET current_order_id = NULL WHERE current_order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(())
    }
}
