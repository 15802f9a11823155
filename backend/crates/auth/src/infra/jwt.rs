//! JWT session token codec
//!
//! HS256 tokens signed with the server-held secret. Expiry is not checked
//! here: `jsonwebtoken` applies a leeway and reads the system clock, while
//! the session rule is an exact `now < exp` against the caller's clock.
//! [`JwtCodec::verify`] therefore only checks the signature and shape, and
//! the use case checks expiry.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::claims::SessionClaims;
use crate::error::{AuthError, AuthResult};

/// Signs and verifies session tokens
#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign claims into a compact JWT
    pub fn sign(&self, claims: &SessionClaims) -> AuthResult<String> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(AuthError::Signing)
    }

    /// Verify the signature and decode the claims
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Session token verification failed");
                AuthError::InvalidToken
            })
    }
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}
