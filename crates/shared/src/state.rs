use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, CookieConfig, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub hashing: DynHashing,
    pub cookie: CookieConfig,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("cookie", &self.cookie)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let jwt_config =
            Arc::new(JwtConfig::new(&config.jwt_secret, config.jwt_expiry_minutes)) as DynJwtService;

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash: hashing.clone(),
            jwt: jwt_config.clone(),
        });

        Self {
            di_container,
            jwt_config,
            hashing,
            cookie: config.cookie.clone(),
        }
    }
}
