use crate::{
    abstract_trait::{DynTableRepository, TableServiceTrait},
    domain::{
        enums::{LookupEnum, TableState},
        requests::{CreateRestaurantTableRequest, UpdateRestaurantTableRequest},
        responses::RestaurantTableResponse,
    },
    errors::ServiceError,
    model::RestaurantTable,
};
use async_trait::async_trait;
use tracing::info;

pub struct TableService {
    table_repository: DynTableRepository,
}

impl TableService {
    pub fn new(table_repository: DynTableRepository) -> Self {
        Self { table_repository }
    }

    async fn ensure_table(&self, id: i64) -> Result<RestaurantTable, ServiceError> {
        self.table_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Table", id))
    }
}

#[async_trait]
impl TableServiceTrait for TableService {
    async fn get_tables(&self) -> Result<Vec<RestaurantTableResponse>, ServiceError> {
        let tables = self.table_repository.find_all().await?;
        Ok(tables.into_iter().map(RestaurantTableResponse::from).collect())
    }

    async fn get_table(&self, id: i64) -> Result<RestaurantTableResponse, ServiceError> {
        let table = self.ensure_table(id).await?;
        Ok(RestaurantTableResponse::from(table))
    }

    async fn get_table_by_number(
        &self,
        number: i32,
    ) -> Result<RestaurantTableResponse, ServiceError> {
        let table = self
            .table_repository
            .find_by_number(number)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Table not found with number: {number}"))
            })?;

        Ok(RestaurantTableResponse::from(table))
    }

    async fn get_tables_by_state(
        &self,
        state: &str,
    ) -> Result<Vec<RestaurantTableResponse>, ServiceError> {
        let state = TableState::parse(state)?;
        let tables = self.table_repository.find_by_state(state.as_str()).await?;
        Ok(tables.into_iter().map(RestaurantTableResponse::from).collect())
    }

    async fn create_table(
        &self,
        input: &CreateRestaurantTableRequest,
    ) -> Result<RestaurantTableResponse, ServiceError> {
        let state = TableState::parse(&input.table_state)?;

        if self
            .table_repository
            .exists_by_number(input.number, None)
            .await?
        {
            return Err(ServiceError::InvalidArgument(format!(
                "Table with number {} already exists",
                input.number
            )));
        }

        let table = self.table_repository.create(input, state.as_str()).await?;
        Ok(RestaurantTableResponse::from(table))
    }

    async fn update_table(
        &self,
        id: i64,
        input: &UpdateRestaurantTableRequest,
    ) -> Result<RestaurantTableResponse, ServiceError> {
        self.ensure_table(id).await?;
        let state = TableState::parse(&input.table_state)?;

        if self
            .table_repository
            .exists_by_number(input.number, Some(id))
            .await?
        {
            return Err(ServiceError::InvalidArgument(format!(
                "Table with number {} already exists",
                input.number
            )));
        }

        let table = self
            .table_repository
            .update(id, input, state.as_str())
            .await?;
        Ok(RestaurantTableResponse::from(table))
    }

    async fn update_table_state(
        &self,
        id: i64,
        state: &str,
    ) -> Result<RestaurantTableResponse, ServiceError> {
        self.ensure_table(id).await?;
        let state = TableState::parse(state)?;

        // Going back to AVAILABLE always detaches the current order.
        let clear_order = state == TableState::Available;
        let table = self
            .table_repository
            .update_state(id, state.as_str(), clear_order)
            .await?;

        info!("✅ Table {} is now {}", table.id, table.table_state);
        Ok(RestaurantTableResponse::from(table))
    }

    async fn assign_order_to_table(
        &self,
        id: i64,
        order_id: i64,
    ) -> Result<RestaurantTableResponse, ServiceError> {
        self.ensure_table(id).await?;

        let table = self
            .table_repository
            .assign_order(id, order_id, TableState::Occupied.as_str())
            .await?;

        info!("✅ Order {order_id} assigned to table {}", table.id);
        Ok(RestaurantTableResponse::from(table))
    }

    async fn delete_table(&self, id: i64) -> Result<(), ServiceError> {
        let table = self.ensure_table(id).await?;

        if table.current_order_id.is_some() {
            return Err(ServiceError::InvalidArgument(
                "Cannot delete table with an active order".into(),
            ));
        }

        self.table_repository.delete(id).await?;
        info!("✅ Deleted table {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::TableRepositoryTrait, errors::RepositoryError};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct InMemoryTableRepo {
        tables: Mutex<Vec<RestaurantTable>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryTableRepo {
        fn with_tables(tables: Vec<RestaurantTable>) -> Self {
            let next = tables.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            Self {
                tables: Mutex::new(tables),
                next_id: Mutex::new(next),
            }
        }
    }

    fn table(id: i64, number: i32, state: &str, current_order_id: Option<i64>) -> RestaurantTable {
        RestaurantTable {
            id,
            number,
            table_state: state.into(),
            current_order_id,
        }
    }

    #[async_trait]
    impl TableRepositoryTrait for InMemoryTableRepo {
        async fn find_all(&self) -> Result<Vec<RestaurantTable>, RepositoryError> {
            Ok(self.tables.lock().await.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<RestaurantTable>, RepositoryError> {
            Ok(self.tables.lock().await.iter().find(|t| t.id == id).cloned())
        }

        async fn find_by_number(
            &self,
            number: i32,
        ) -> Result<Option<RestaurantTable>, RepositoryError> {
            Ok(self
                .tables
                .lock()
                .await
                .iter()
                .find(|t| t.number == number)
                .cloned())
        }

        async fn find_by_state(
            &self,
            state: &str,
        ) -> Result<Vec<RestaurantTable>, RepositoryError> {
            Ok(self
                .tables
                .lock()
                .await
                .iter()
                .filter(|t| t.table_state == state)
                .cloned()
                .collect())
        }

        async fn exists_by_number(
            &self,
            number: i32,
            exclude_id: Option<i64>,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .tables
                .lock()
                .await
                .iter()
                .any(|t| t.number == number && Some(t.id) != exclude_id))
        }

        async fn create(
            &self,
            input: &CreateRestaurantTableRequest,
            state: &str,
        ) -> Result<RestaurantTable, RepositoryError> {
            let mut next = self.next_id.lock().await;
            let created = table(*next, input.number, state, None);
            *next += 1;
            self.tables.lock().await.push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            id: i64,
            input: &UpdateRestaurantTableRequest,
            state: &str,
        ) -> Result<RestaurantTable, RepositoryError> {
            let mut tables = self.tables.lock().await;
            let t = tables
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(RepositoryError::NotFound)?;
            t.number = input.number;
            t.table_state = state.to_string();
            t.current_order_id = input.current_order_id;
            Ok(t.clone())
        }

        async fn update_state(
            &self,
            id: i64,
            state: &str,
            clear_order: bool,
        ) -> Result<RestaurantTable, RepositoryError> {
            let mut tables = self.tables.lock().await;
            let t = tables
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(RepositoryError::NotFound)?;
            t.table_state = state.to_string();
            if clear_order {
                t.current_order_id = None;
            }
            Ok(t.clone())
        }

        async fn assign_order(
            &self,
            id: i64,
            order_id: i64,
            state: &str,
        ) -> Result<RestaurantTable, RepositoryError> {
            let mut tables = self.tables.lock().await;
            let t = tables
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(RepositoryError::NotFound)?;
            t.current_order_id = Some(order_id);
            t.table_state = state.to_string();
            Ok(t.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.tables.lock().await.retain(|t| t.id != id);
            Ok(())
        }
    }

    fn svc(tables: Vec<RestaurantTable>) -> TableService {
        TableService::new(Arc::new(InMemoryTableRepo::with_tables(tables)))
    }

    #[tokio::test]
    async fn available_clears_the_current_order() {
        let svc = svc(vec![table(1, 5, "OCCUPIED", Some(42))]);

        let updated = svc.update_table_state(1, "available").await.unwrap();
        assert_eq!(updated.table_state, "AVAILABLE");
        assert_eq!(updated.current_order_id, None);
    }

    #[tokio::test]
    async fn other_states_keep_the_current_order() {
        let svc = svc(vec![table(1, 5, "OCCUPIED", Some(42))]);

        let updated = svc.update_table_state(1, "reserved").await.unwrap();
        assert_eq!(updated.table_state, "RESERVED");
        assert_eq!(updated.current_order_id, Some(42));
    }

    #[tokio::test]
    async fn assign_order_forces_occupied() {
        let svc = svc(vec![table(1, 5, "RESERVED", None)]);

        let updated = svc.assign_order_to_table(1, 77).await.unwrap();
        assert_eq!(updated.table_state, "OCCUPIED");
        assert_eq!(updated.current_order_id, Some(77));
    }

    #[tokio::test]
    async fn delete_is_guarded_by_the_active_order() {
        let svc = svc(vec![
            table(1, 5, "OCCUPIED", Some(42)),
            table(2, 6, "AVAILABLE", None),
        ]);

        let err = svc.delete_table(1).await.unwrap_err();
        assert!(
            matches!(err, ServiceError::InvalidArgument(msg) if msg == "Cannot delete table with an active order")
        );

        svc.delete_table(2).await.unwrap();
    }

    #[tokio::test]
    async fn number_uniqueness_excludes_own_row() {
        let svc = svc(vec![table(1, 5, "AVAILABLE", None), table(2, 6, "AVAILABLE", None)]);

        let err = svc
            .create_table(&CreateRestaurantTableRequest {
                number: 5,
                table_state: "AVAILABLE".into(),
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::InvalidArgument(msg) if msg == "Table with number 5 already exists")
        );

        // Re-saving table 1 with its own number is fine.
        svc.update_table(
            1,
            &UpdateRestaurantTableRequest {
                number: 5,
                table_state: "RESERVED".into(),
                current_order_id: None,
            },
        )
        .await
        .unwrap();

        // Stealing table 2's number is not.
        let err = svc
            .update_table(
                1,
                &UpdateRestaurantTableRequest {
                    number: 6,
                    table_state: "RESERVED".into(),
                    current_order_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn unknown_state_is_rejected() {
        let svc = svc(vec![table(1, 5, "AVAILABLE", None)]);

        let err = svc.update_table_state(1, "flooded").await.unwrap_err();
        assert!(
            matches!(err, ServiceError::InvalidArgument(msg) if msg == "Invalid table state: flooded")
        );
    }

    #[tokio::test]
    async fn lookup_by_number_reports_the_number() {
        let svc = svc(vec![]);

        let err = svc.get_table_by_number(9).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Table not found with number: 9"));
    }
}
