use crate::authentication::claims::Claims;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token does not have three dot-separated segments
    NotAJwt,
    Encoding(String),
    Payload(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::NotAJwt => f.write_str("token is not a JWT"),
            TokenError::Encoding(e) => write!(f, "token payload is not base64url: {}", e),
            TokenError::Payload(e) => write!(f, "token payload is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for TokenError {}

/// Bearer token handed out by the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: String) -> Self {
        // a token may arrive as "Bearer <token>"
        let token = match token.strip_prefix("Bearer ") {
            Some(stripped) => stripped.trim().to_string(),
            None => token.trim().to_string(),
        };
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the payload segment without verifying the signature.
    pub fn claims(&self) -> Result<Claims, TokenError> {
        let mut segments = self.0.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (segments.next(), segments.next(), segments.next(), segments.next())
        else {
            return Err(TokenError::NotAJwt);
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| TokenError::Encoding(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
    }

    /// `None` for opaque tokens and tokens without an `exp` claim.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.claims().ok()?.exp?;
        DateTime::from_timestamp(exp, 0)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires_at| expires_at <= now)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use chrono::Duration;

    #[test]
    fn test_reads_expiry_claim() {
        let now = Utc::now();
        let token = jwt_expiring_at(now + Duration::hours(1));

        assert!(!token.is_expired(now));
        assert!(token.is_expired(now + Duration::hours(2)));
        assert_eq!(token.expires_at().unwrap().timestamp(), (now + Duration::hours(1)).timestamp());
    }

    #[test]
    fn test_opaque_token_never_expires() {
        let token = AuthToken::new("d41d8cd98f00b204e9800998ecf8427e".to_string());

        assert_eq!(token.claims(), Err(TokenError::NotAJwt));
        assert!(token.expires_at().is_none());
        assert!(!token.is_expired(Utc::now()));
    }

    #[test]
    fn test_malformed_payload() {
        let token = AuthToken::new("aaa.!!!.ccc".to_string());
        assert!(matches!(token.claims(), Err(TokenError::Encoding(_))));

        let not_json = format!("aaa.{}.ccc", URL_SAFE_NO_PAD.encode("plain"));
        assert!(matches!(AuthToken::new(not_json).claims(), Err(TokenError::Payload(_))));
    }

    #[test]
    fn test_strips_bearer_prefix() {
        let token = AuthToken::new("Bearer abc.def.ghi".to_string());
        assert_eq!(token.as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = AuthToken::new("secret-token".to_string());
        assert_eq!(format!("{:?}", token), "AuthToken(<redacted>)");
    }
}
