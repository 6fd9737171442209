use crate::errors::AuthError;
use chrono::Utc;
use models::users::{Role, User};
use services::authentication::{Session, SessionError};

/// Checks the session before any request goes out. An expired token is
/// dropped from the session on the way.
pub(crate) fn require_role(session: &mut Session, required: Role) -> Result<User, AuthError> {
    match session.requires_role(required, Utc::now()) {
        Ok(user) => Ok(user.clone()),
        Err(SessionError::Expired) => {
            session.invalidate("token expired");
            Err(SessionError::Expired.into())
        }
        Err(e) => {
            tracing::warn!(required = %required, error = %e, "operation refused");
            Err(e.into())
        }
    }
}
