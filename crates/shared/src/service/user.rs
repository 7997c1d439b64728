use crate::{
    abstract_trait::{DynHashing, DynRoleRepository, DynUserRepository, UserServiceTrait},
    domain::{
        enums::{LookupEnum, Role},
        requests::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest},
        responses::UserResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct UserService {
    user_repository: DynUserRepository,
    role_repository: DynRoleRepository,
    hashing: DynHashing,
}

impl UserService {
    pub fn new(
        user_repository: DynUserRepository,
        role_repository: DynRoleRepository,
        hashing: DynHashing,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            hashing,
        }
    }

    /// Coerces the raw role and maps it to its row id, so the repository can
    /// write the user and the assignment in one transaction.
    async fn resolve_role_id(&self, raw_role: &str) -> Result<i64, ServiceError> {
        let role = Role::parse(raw_role)?;
        let row = self
            .role_repository
            .find_by_name(role.as_str())
            .await?
            .ok_or_else(|| {
                ServiceError::Internal(format!("Role {role} has not been provisioned"))
            })?;

        Ok(row.id)
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_users(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let users = self.user_repository.find_all().await?;

        let mut responses = Vec::with_capacity(users.len());
        for user in users {
            let roles = self.user_repository.roles_of(user.id).await?;
            responses.push(UserResponse::from_model(user, roles));
        }

        Ok(responses)
    }

    async fn get_user(&self, id: i64) -> Result<UserResponse, ServiceError> {
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        let roles = self.user_repository.roles_of(user.id).await?;
        Ok(UserResponse::from_model(user, roles))
    }

    async fn create_user(&self, input: &CreateUserRequest) -> Result<UserResponse, ServiceError> {
        if self
            .user_repository
            .exists_by_username(&input.username, None)
            .await?
        {
            return Err(ServiceError::InvalidArgument(
                "Error: Username is already taken!".into(),
            ));
        }

        if self
            .user_repository
            .exists_by_email(&input.email, None)
            .await?
        {
            return Err(ServiceError::InvalidArgument(
                "Error: Email is already in use!".into(),
            ));
        }

        // Reject an unknown role before touching the users table.
        let role_id = self.resolve_role_id(&input.role).await?;

        let password_hash = self.hashing.hash_password(&input.password).await?;
        let user = self
            .user_repository
            .create(input, &password_hash, role_id)
            .await?;

        let roles = self.user_repository.roles_of(user.id).await?;
        info!("✅ Created user {} ({})", user.id, user.username);

        Ok(UserResponse::from_model(user, roles))
    }

    async fn update_user(
        &self,
        id: i64,
        input: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        if let Some(username) = &input.username {
            if self
                .user_repository
                .exists_by_username(username, Some(id))
                .await?
            {
                return Err(ServiceError::InvalidArgument(
                    "Error: Username is already taken!".into(),
                ));
            }
        }

        if let Some(email) = &input.email {
            if self.user_repository.exists_by_email(email, Some(id)).await? {
                return Err(ServiceError::InvalidArgument(
                    "Error: Email is already in use!".into(),
                ));
            }
        }

        let role_id = match &input.role {
            Some(raw_role) => Some(self.resolve_role_id(raw_role).await?),
            None => None,
        };

        let user = self.user_repository.update(id, input, role_id).await?;
        let roles = self.user_repository.roles_of(user.id).await?;

        Ok(UserResponse::from_model(user, roles))
    }

    async fn change_password(
        &self,
        id: i64,
        input: &ChangePasswordRequest,
    ) -> Result<(), ServiceError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        if !input.is_new_password_confirmed() {
            return Err(ServiceError::InvalidArgument(
                "New password and confirmation do not match".into(),
            ));
        }

        let password_hash = self.hashing.hash_password(&input.new_password).await?;
        self.user_repository.update_password(id, &password_hash).await?;

        info!("✅ Password changed for user {id}");
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> Result<(), ServiceError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        self.user_repository.delete(id).await?;
        info!("✅ Deleted user {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{RoleRepositoryTrait, UserRepositoryTrait},
        config::Hashing,
        errors::RepositoryError,
        model::{Role as RoleModel, User},
    };
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct InMemoryUserRepo {
        users: Mutex<Vec<User>>,
        assignments: Mutex<Vec<(i64, i64)>>,
        next_id: Mutex<i64>,
        fail_updates: Mutex<bool>,
    }

    impl InMemoryUserRepo {
        fn with_users(users: Vec<User>) -> Self {
            let next = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
            Self {
                users: Mutex::new(users),
                assignments: Mutex::new(Vec::new()),
                next_id: Mutex::new(next),
                fail_updates: Mutex::new(false),
            }
        }
    }

    fn ts() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn user(id: i64, username: &str, email: &str) -> User {
        User {
            id,
            username: username.into(),
            email: email.into(),
            password: "hash".into(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepo {
        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(self.users.lock().await.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
            Ok(self.users.lock().await.iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .await
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn exists_by_username(
            &self,
            username: &str,
            exclude_id: Option<i64>,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .users
                .lock()
                .await
                .iter()
                .any(|u| u.username == username && Some(u.id) != exclude_id))
        }

        async fn exists_by_email(
            &self,
            email: &str,
            exclude_id: Option<i64>,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .users
                .lock()
                .await
                .iter()
                .any(|u| u.email == email && Some(u.id) != exclude_id))
        }

        async fn exists_with_role(&self, _role_name: &str) -> Result<bool, RepositoryError> {
            Ok(!self.assignments.lock().await.is_empty())
        }

        async fn create(
            &self,
            input: &CreateUserRequest,
            password_hash: &str,
            role_id: i64,
        ) -> Result<User, RepositoryError> {
            let mut next = self.next_id.lock().await;
            let created = User {
                id: *next,
                username: input.username.clone(),
                email: input.email.clone(),
                password: password_hash.into(),
                created_at: ts(),
                updated_at: ts(),
            };
            *next += 1;
            self.users.lock().await.push(created.clone());
            self.assignments.lock().await.push((created.id, role_id));
            Ok(created)
        }

        async fn update(
            &self,
            id: i64,
            input: &UpdateUserRequest,
            role_id: Option<i64>,
        ) -> Result<User, RepositoryError> {
            // A failed transaction leaves neither the row nor the assignment
            // changed.
            if *self.fail_updates.lock().await {
                return Err(RepositoryError::Conflict("simulated write failure".into()));
            }

            let mut users = self.users.lock().await;
            let user = users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or(RepositoryError::NotFound)?;
            if let Some(username) = &input.username {
                user.username = username.clone();
            }
            if let Some(email) = &input.email {
                user.email = email.clone();
            }
            if let Some(role_id) = role_id {
                let mut assignments = self.assignments.lock().await;
                assignments.retain(|(uid, _)| *uid != id);
                assignments.push((id, role_id));
            }
            Ok(user.clone())
        }

        async fn update_password(
            &self,
            id: i64,
            password_hash: &str,
        ) -> Result<(), RepositoryError> {
            let mut users = self.users.lock().await;
            let user = users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or(RepositoryError::NotFound)?;
            user.password = password_hash.into();
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.users.lock().await.retain(|u| u.id != id);
            Ok(())
        }

        async fn roles_of(&self, user_id: i64) -> Result<Vec<String>, RepositoryError> {
            let names = self
                .assignments
                .lock()
                .await
                .iter()
                .filter(|(uid, _)| *uid == user_id)
                .map(|(_, role_id)| {
                    Role::from_id(*role_id)
                        .map(|r| r.as_str().to_string())
                        .unwrap_or_default()
                })
                .collect();
            Ok(names)
        }
    }

    struct EnumRoleRepo;

    #[async_trait]
    impl RoleRepositoryTrait for EnumRoleRepo {
        async fn find_by_name(&self, name: &str) -> Result<Option<RoleModel>, RepositoryError> {
            Ok(Role::parse(name).ok().map(|r| RoleModel {
                id: r.id(),
                name: r.as_str().to_string(),
            }))
        }

        async fn create(&self, name: &str) -> Result<RoleModel, RepositoryError> {
            Ok(RoleModel {
                id: 99,
                name: name.to_string(),
            })
        }
    }

    fn service(users: Vec<User>) -> UserService {
        service_with(Arc::new(InMemoryUserRepo::with_users(users)))
    }

    fn service_with(repo: Arc<InMemoryUserRepo>) -> UserService {
        UserService::new(repo, Arc::new(EnumRoleRepo), Arc::new(Hashing::new()))
    }

    #[tokio::test]
    async fn create_assigns_role_and_hashes_password() {
        let svc = service(vec![]);

        let created = svc
            .create_user(&CreateUserRequest {
                username: "pedro".into(),
                email: "pedro@example.com".into(),
                password: "longenough".into(),
                role: "waiter".into(),
            })
            .await
            .unwrap();

        assert_eq!(created.roles, vec!["WAITER".to_string()]);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let svc = service(vec![user(1, "pedro", "pedro@example.com")]);

        let err = svc
            .create_user(&CreateUserRequest {
                username: "pedro".into(),
                email: "other@example.com".into(),
                password: "longenough".into(),
                role: "WAITER".into(),
            })
            .await
            .unwrap_err();

        assert!(
            matches!(err, ServiceError::InvalidArgument(msg) if msg == "Error: Username is already taken!")
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let svc = service(vec![user(1, "pedro", "pedro@example.com")]);

        let err = svc
            .create_user(&CreateUserRequest {
                username: "other".into(),
                email: "pedro@example.com".into(),
                password: "longenough".into(),
                role: "WAITER".into(),
            })
            .await
            .unwrap_err();

        assert!(
            matches!(err, ServiceError::InvalidArgument(msg) if msg == "Error: Email is already in use!")
        );
    }

    #[tokio::test]
    async fn update_excludes_own_row_from_uniqueness() {
        let svc = service(vec![
            user(1, "pedro", "pedro@example.com"),
            user(2, "maria", "maria@example.com"),
        ]);

        // Keeping your own username is fine.
        let kept = svc
            .update_user(
                1,
                &UpdateUserRequest {
                    username: Some("pedro".into()),
                    email: None,
                    role: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(kept.username, "pedro");

        // Taking someone else's is not.
        let err = svc
            .update_user(
                1,
                &UpdateUserRequest {
                    username: Some("maria".into()),
                    email: None,
                    role: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn unknown_role_is_a_coercion_error() {
        let svc = service(vec![]);

        let err = svc
            .create_user(&CreateUserRequest {
                username: "pedro".into(),
                email: "pedro@example.com".into(),
                password: "longenough".into(),
                role: "SOMMELIER".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(msg) if msg == "Invalid role: SOMMELIER"));
    }

    #[tokio::test]
    async fn password_change_requires_matching_confirmation() {
        let svc = service(vec![user(1, "pedro", "pedro@example.com")]);

        let err = svc
            .change_password(
                1,
                &ChangePasswordRequest {
                    new_password: "newpassword".into(),
                    confirm_password: "different".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::InvalidArgument(msg) if msg == "New password and confirmation do not match")
        );

        svc.change_password(
            1,
            &ChangePasswordRequest {
                new_password: "newpassword".into(),
                confirm_password: "newpassword".into(),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn failed_update_leaves_username_and_role_untouched() {
        let repo = Arc::new(InMemoryUserRepo::with_users(vec![]));
        let svc = service_with(repo.clone());

        svc.create_user(&CreateUserRequest {
            username: "pedro".into(),
            email: "pedro@example.com".into(),
            password: "longenough".into(),
            role: "WAITER".into(),
        })
        .await
        .unwrap();

        *repo.fail_updates.lock().await = true;

        let err = svc
            .update_user(
                1,
                &UpdateUserRequest {
                    username: Some("pedro-renamed".into()),
                    email: None,
                    role: Some("ADMIN".into()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Repo(_)));

        assert_eq!(repo.roles_of(1).await.unwrap(), vec!["WAITER".to_string()]);
        let unchanged = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(unchanged.username, "pedro");
    }

    #[tokio::test]
    async fn update_swaps_the_role_with_the_row() {
        let repo = Arc::new(InMemoryUserRepo::with_users(vec![]));
        let svc = service_with(repo.clone());

        svc.create_user(&CreateUserRequest {
            username: "pedro".into(),
            email: "pedro@example.com".into(),
            password: "longenough".into(),
            role: "WAITER".into(),
        })
        .await
        .unwrap();

        let updated = svc
            .update_user(
                1,
                &UpdateUserRequest {
                    username: Some("pedro-renamed".into()),
                    email: None,
                    role: Some("admin".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "pedro-renamed");
        assert_eq!(updated.roles, vec!["ADMIN".to_string()]);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let svc = service(vec![]);

        let err = svc.delete_user(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "User not found with id: 42"));
    }
}
