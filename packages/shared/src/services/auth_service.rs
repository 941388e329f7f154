use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::responses::{TokenClaims, TokenResponse};
use crate::models::user::SessionUser;
use crate::services::errors::auth_service_errors::AuthServiceError;

const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Verifies bearer tokens minted by the hosted auth service and turns them
/// into a [`SessionUser`].
#[derive(Clone)]
pub struct AuthService {
    jwt_secret: String,
}

impl AuthService {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        AuthService {
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Mints a token the same way the hosted service does. Used for local
    /// runs against the in-memory store.
    pub fn issue_token(&self, user: &SessionUser) -> Result<TokenResponse, AuthServiceError> {
        if user.id.is_empty() || user.email.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "User ID and email cannot be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let expires_in = TOKEN_LIFETIME_HOURS * 60 * 60;
        let claims = TokenClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.display_name.clone(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(|e| AuthServiceError::JwtError(format!("{:#?}", e)))?;

        Ok(TokenResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let validation = Validation::default();

        match decode::<TokenClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Err(AuthServiceError::ExpiredToken)
                }
                _ => Err(AuthServiceError::InvalidToken),
            },
        }
    }

    pub fn session_user(&self, token: &str) -> Result<SessionUser, AuthServiceError> {
        let claims = self.verify_token(token)?;
        Ok(SessionUser {
            id: claims.sub,
            email: claims.email,
            display_name: claims.name,
        })
    }
}
