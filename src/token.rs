use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is malformed")]
    Malformed,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Signs and verifies HS256 tokens with a single shared secret.
///
/// Tokens carry no expiry: anything issued stays valid for as long as the
/// secret does. Issuing is deterministic, so the same claims always produce
/// the same token.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_aud = false;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(TokenError::Signing)
    }

    pub fn verify<C: DeserializeOwned + Clone>(&self, token: &str) -> Result<C, TokenError> {
        decode::<C>(token, &self.decoding, &self.validation).map(|data| data.claims).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::models::Credentials;

    fn admin() -> Credentials {
        Credentials { email: "admin@example.com".into(), password: "hunter22".into() }
    }

    #[test]
    fn verify_returns_issued_credentials() {
        let tokens = TokenService::new("test-secret");
        let token = tokens.issue(&admin()).unwrap();

        let claims: Credentials = tokens.verify(&token).unwrap();
        assert_eq!(claims, admin());
    }

    #[test]
    fn verify_returns_arbitrary_claim_maps() {
        let tokens = TokenService::new("test-secret");
        let claims = json!({ "email": "someone@example.com", "role": "viewer", "n": 3 });

        let token = tokens.issue(&claims).unwrap();
        let decoded: Value = tokens.verify(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn issuing_is_deterministic() {
        let tokens = TokenService::new("test-secret");
        assert_eq!(tokens.issue(&admin()).unwrap(), tokens.issue(&admin()).unwrap());
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let token = TokenService::new("other-secret").issue(&admin()).unwrap();

        let err = TokenService::new("test-secret").verify::<Credentials>(&token).unwrap_err();
        assert!(matches!(err, TokenError::InvalidSignature));
    }

    #[test]
    fn rejects_garbage() {
        let err = TokenService::new("test-secret").verify::<Credentials>("not.a.token").unwrap_err();
        assert!(matches!(err, TokenError::Malformed));
    }
}
