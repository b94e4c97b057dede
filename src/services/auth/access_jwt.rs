use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::config::Config;
use crate::services::auth::claims::Claims;

// Errors returned by access-token verification.
#[derive(Debug, Error)]
pub enum AccessJwtError {
    #[error("no signing secret configured")]
    MissingSecret,
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// HS256 access-token verifier.
///
/// - Key material is intentionally not printable via Debug.
/// - Without a secret every token is rejected.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: Option<DecodingKey>,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("has_secret", &self.decoding_key.is_some())
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(
        secret: Option<&str>,
        issuer: Option<&str>,
        audience: Option<&str>,
        leeway_seconds: u64,
    ) -> Self {
        let decoding_key = secret.map(|s| DecodingKey::from_secret(s.as_bytes()));

        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional but still enforced when the token carries it.
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        validation.leeway = leeway_seconds;

        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
            validation.required_spec_claims.insert("iss".to_string());
        }
        match audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                validation.required_spec_claims.insert("aud".to_string());
            }
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.jwt_secret.as_deref(),
            config.jwt_issuer.as_deref(),
            config.jwt_audience.as_deref(),
            config.jwt_leeway_seconds,
        )
    }

    pub fn has_secret(&self) -> bool {
        self.decoding_key.is_some()
    }

    /// Verify the signature (HS256 only) and registered claims, then decode the payload.
    pub fn verify(&self, token: &str) -> Result<Claims, AccessJwtError> {
        let key = self
            .decoding_key
            .as_ref()
            .ok_or(AccessJwtError::MissingSecret)?;

        let data = jsonwebtoken::decode::<Claims>(token, key, &self.validation)?;

        Ok(data.claims)
    }
}
