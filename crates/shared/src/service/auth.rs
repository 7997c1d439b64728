use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository},
    domain::{
        requests::LoginRequest,
        responses::{AuthSession, UserResponse},
    },
    errors::ServiceError,
    utils::generate_random_string,
};
use async_trait::async_trait;
use tracing::info;

pub struct AuthService {
    user_repository: DynUserRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(user_repository: DynUserRepository, hashing: DynHashing, jwt: DynJwtService) -> Self {
        Self {
            user_repository,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, input: &LoginRequest) -> Result<AuthSession, ServiceError> {
        let user = self
            .user_repository
            .find_by_username(&input.username)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &input.password)
            .await
            .map_err(|_| {
                info!("🔒 Failed login attempt for {}", input.username);
                ServiceError::InvalidCredentials
            })?;

        let roles = self.user_repository.roles_of(user.id).await?;
        let token = self.jwt.generate_token(user.id, &user.username, &roles)?;
        let csrf_token =
            generate_random_string(32).map_err(|err| ServiceError::Internal(err.to_string()))?;

        info!("✅ User {} logged in", user.username);

        Ok(AuthSession {
            token,
            username: user.username,
            csrf_token,
        })
    }

    async fn get_me(&self, user_id: i64) -> Result<UserResponse, ServiceError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        let roles = self.user_repository.roles_of(user.id).await?;

        Ok(UserResponse::from_model(user, roles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{HashingTrait, UserRepositoryTrait},
        config::{Hashing, JwtConfig},
        domain::requests::{CreateUserRequest, UpdateUserRequest},
        errors::RepositoryError,
        model::User,
    };
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct SingleUserRepo {
        user: User,
        roles: Vec<String>,
    }

    #[async_trait]
    impl UserRepositoryTrait for SingleUserRepo {
        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(vec![self.user.clone()])
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
            Ok((self.user.id == id).then(|| self.user.clone()))
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
            Ok((self.user.username == username).then(|| self.user.clone()))
        }

        async fn exists_by_username(
            &self,
            _username: &str,
            _exclude_id: Option<i64>,
        ) -> Result<bool, RepositoryError> {
            unimplemented!()
        }

        async fn exists_by_email(
            &self,
            _email: &str,
            _exclude_id: Option<i64>,
        ) -> Result<bool, RepositoryError> {
            unimplemented!()
        }

        async fn exists_with_role(&self, _role_name: &str) -> Result<bool, RepositoryError> {
            unimplemented!()
        }

        async fn create(
            &self,
            _input: &CreateUserRequest,
            _password_hash: &str,
            _role_id: i64,
        ) -> Result<User, RepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: i64,
            _input: &UpdateUserRequest,
            _role_id: Option<i64>,
        ) -> Result<User, RepositoryError> {
            unimplemented!()
        }

        async fn update_password(
            &self,
            _id: i64,
            _password_hash: &str,
        ) -> Result<(), RepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
            unimplemented!()
        }

        async fn roles_of(&self, _user_id: i64) -> Result<Vec<String>, RepositoryError> {
            Ok(self.roles.clone())
        }
    }

    async fn service_with_password(password: &str) -> AuthService {
        let hashing = Hashing::new();
        let hash = hashing.hash_password(password).await.unwrap();

        let repo = SingleUserRepo {
            user: User {
                id: 7,
                username: "maria".into(),
                email: "maria@example.com".into(),
                password: hash,
                created_at: NaiveDate::from_ymd_opt(2026, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
                updated_at: NaiveDate::from_ymd_opt(2026, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            },
            roles: vec!["WAITER".into()],
        };

        let jwt = JwtConfig::new("test-secret", 60);

        AuthService::new(Arc::new(repo), Arc::new(hashing), Arc::new(jwt))
    }

    #[tokio::test]
    async fn login_issues_token_and_csrf() {
        let service = service_with_password("hunter2hunter2").await;

        let session = service
            .login(&LoginRequest {
                username: "maria".into(),
                password: "hunter2hunter2".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.username, "maria");
        assert!(!session.token.is_empty());
        assert_eq!(session.csrf_token.len(), 32);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let service = service_with_password("hunter2hunter2").await;

        let err = service
            .login(&LoginRequest {
                username: "maria".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_username_is_invalid_credentials() {
        let service = service_with_password("hunter2hunter2").await;

        let err = service
            .login(&LoginRequest {
                username: "nobody".into(),
                password: "hunter2hunter2".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn me_returns_profile_with_roles() {
        let service = service_with_password("hunter2hunter2").await;

        let me = service.get_me(7).await.unwrap();
        assert_eq!(me.username, "maria");
        assert_eq!(me.roles, vec!["WAITER".to_string()]);

        let err = service.get_me(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "User not found with id: 99"));
    }
}
