use crate::{
    abstract_trait::RoleRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Role,
};
use async_trait::async_trait;

pub struct RoleRepository {
    db: ConnectionPool,
}

impl RoleRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepositoryTrait for RoleRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let role = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(role)
    }

    async fn create(&self, name: &str) -> Result<Role, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let role =
            sqlx::query_as::<_, Role>("INSERT INTO roles (name) VALUES ($1) RETURNING id, name")
                .bind(name)
                .fetch_one(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(role)
    }
}
