use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i64) -> Result<String, ServiceError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            iat: now.timestamp() as usize,
            exp: (now + Duration::minutes(60)).timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<i64, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                ErrorKind::InvalidToken | ErrorKind::InvalidSignature => {
                    ServiceError::InvalidToken
                }
                _ => ServiceError::Jwt(err),
            })?;

        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_the_user_id() {
        let jwt = JwtConfig::new("secret");
        let token = jwt.generate_token(42).unwrap();
        assert_eq!(jwt.verify_token(&token).unwrap(), 42);
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let token = JwtConfig::new("one").generate_token(42).unwrap();
        let err = JwtConfig::new("two").verify_token(&token).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidToken));
    }

    #[test]
    fn rejects_garbage_tokens() {
        let err = JwtConfig::new("secret")
            .verify_token("not-a-jwt")
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidToken));
    }
}
