use crate::{
    abstract_trait::{DynHashing, DynRoleRepository, DynUserRepository},
    config::DefaultAdminConfig,
    domain::{
        enums::{LookupEnum, Role},
        requests::CreateUserRequest,
    },
};
use anyhow::{Context, Result, anyhow};
use tracing::info;

/// Idempotent startup seeding: role rows for every known role, then a
/// default admin account unless some ADMIN-role user already exists.
pub struct Seeder {
    pub user_repository: DynUserRepository,
    pub role_repository: DynRoleRepository,
    pub hashing: DynHashing,
}

impl Seeder {
    pub async fn run(&self, admin: &DefaultAdminConfig) -> Result<()> {
        self.seed_roles().await?;
        self.seed_default_admin(admin).await?;
        Ok(())
    }

    async fn seed_roles(&self) -> Result<()> {
        for role in Role::variants() {
            let existing = self
                .role_repository
                .find_by_name(role.as_str())
                .await
                .context("failed to look up role")?;

            if existing.is_none() {
                self.role_repository
                    .create(role.as_str())
                    .await
                    .context("failed to seed role")?;
                info!("✅ Seeded role {role}");
            }
        }

        Ok(())
    }

    async fn seed_default_admin(&self, admin: &DefaultAdminConfig) -> Result<()> {
        let has_admin = self
            .user_repository
            .exists_with_role(Role::Admin.as_str())
            .await
            .context("failed to check for admin users")?;

        if has_admin {
            return Ok(());
        }

        let password_hash = self
            .hashing
            .hash_password(&admin.password)
            .await
            .context("failed to hash default admin password")?;

        let role_row = self
            .role_repository
            .find_by_name(Role::Admin.as_str())
            .await?
            .ok_or_else(|| anyhow!("ADMIN role missing after seeding"))?;

        let user = self
            .user_repository
            .create(
                &CreateUserRequest {
                    username: admin.username.clone(),
                    email: admin.email.clone(),
                    password: admin.password.clone(),
                    role: Role::Admin.as_str().to_string(),
                },
                &password_hash,
                role_row.id,
            )
            .await
            .context("failed to create default admin")?;

        info!("✅ Seeded default admin {}", user.username);
        Ok(())
    }
}
