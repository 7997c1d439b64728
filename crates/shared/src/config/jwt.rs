use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub username: String,
    pub roles: Vec<String>,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    jwt_secret: String,
    expiry_minutes: i64,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str, expiry_minutes: i64) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            expiry_minutes,
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(
        &self,
        user_id: i64,
        username: &str,
        roles: &[String],
    ) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::minutes(self.expiry_minutes)).timestamp() as usize;

        let claims = Claims {
            user_id,
            username: username.to_string(),
            roles: roles.to_vec(),
            exp,
            iat,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;
        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    fn expiry_seconds(&self) -> i64 {
        self.expiry_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::JwtServiceTrait;

    #[test]
    fn generate_then_verify_returns_claims() {
        let jwt = JwtConfig::new("test-secret", 60);
        let roles = vec!["ADMIN".to_string()];

        let token = jwt.generate_token(7, "alice", &roles).unwrap();
        let claims = jwt.verify_token(&token).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.roles, roles);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let jwt = JwtConfig::new("secret-a", 60);
        let other = JwtConfig::new("secret-b", 60);

        let token = jwt.generate_token(1, "bob", &[]).unwrap();
        assert!(other.verify_token(&token).is_err());
    }
}
