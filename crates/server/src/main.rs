use anyhow::{Context, Result};
use dotenv::dotenv;
use server::handler::AppRouter;
use shared::{
    config::{Config, ConnectionManager},
    seeder::Seeder,
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("server");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to create connection pool")?;

    if config.run_migrations {
        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        info!("✅ Migrations applied");
    }

    let state = AppState::new(pool, &config);

    let seeder = Seeder {
        user_repository: state.di_container.user_repository.clone(),
        role_repository: state.di_container.role_repository.clone(),
        hashing: state.hashing.clone(),
    };
    seeder
        .run(&config.default_admin)
        .await
        .context("Failed to seed initial data")?;

    info!("🚀 Server started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
