use crate::authentication::token::AuthToken;
use chrono::{DateTime, Utc};
use models::users::{Role, User};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NotSignedIn,
    Expired,
    Forbidden { required: Role },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotSignedIn => f.write_str("Please sign in to continue"),
            SessionError::Expired => f.write_str("Your session has expired. Please sign in again"),
            SessionError::Forbidden { required } => {
                write!(f, "This action requires {} access", required)
            }
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone)]
struct SignedIn {
    token: AuthToken,
    user: User,
    signed_in_at: DateTime<Utc>,
}

/// Who is signed in, passed explicitly to everything that talks to the API.
/// Starts anonymous, is filled by a successful login and emptied again on
/// logout or when the server rejects the token.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<SignedIn>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, token: AuthToken, user: User) {
        tracing::info!(user_id = %user.id, role = %user.role, "session started");
        self.current = Some(SignedIn {
            token,
            user,
            signed_in_at: Utc::now(),
        });
    }

    pub fn sign_out(&mut self) {
        if let Some(previous) = self.current.take() {
            tracing::info!(user_id = %previous.user.id, "session ended");
        }
    }

    /// Drops the credentials after the server or the clock says they are no
    /// longer good.
    pub fn invalidate(&mut self, reason: &str) {
        if let Some(previous) = self.current.take() {
            tracing::warn!(
                user_id = %previous.user.id,
                signed_in_for_secs = (Utc::now() - previous.signed_in_at).num_seconds(),
                reason,
                "session invalidated"
            );
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|signed_in| &signed_in.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    pub fn has_role(&self, required: Role) -> bool {
        self.role().is_some_and(|role| role.includes(required))
    }

    /// The token to send, or why there is none. Read-only: an expired token
    /// is reported as `Expired` and the caller invalidates the session.
    pub fn bearer(&self, now: DateTime<Utc>) -> Result<&str, SessionError> {
        let signed_in = self.current.as_ref().ok_or(SessionError::NotSignedIn)?;
        if signed_in.token.is_expired(now) {
            return Err(SessionError::Expired);
        }
        Ok(signed_in.token.as_str())
    }

    /// The signed-in user, provided their role covers `required` and the
    /// token is still current.
    pub fn requires_role(&self, required: Role, now: DateTime<Utc>) -> Result<&User, SessionError> {
        self.bearer(now)?;
        let user = self.user().ok_or(SessionError::NotSignedIn)?;
        if !user.role.includes(required) {
            return Err(SessionError::Forbidden { required });
        }
        Ok(user)
    }
}
