use chrono::Utc;
use data_access_objects::DaoError;
use services::authentication::{Session, SessionError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No usable credentials, caught before any request went out
    Session(SessionError),
    Api(DaoError),
}

impl From<SessionError> for RepositoryError {
    fn from(e: SessionError) -> Self {
        RepositoryError::Session(e)
    }
}

impl From<DaoError> for RepositoryError {
    fn from(e: DaoError) -> Self {
        RepositoryError::Api(e)
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Session(e) => write!(f, "{}", e),
            RepositoryError::Api(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Token for an authenticated call.
pub(crate) fn bearer(session: &Session) -> Result<&str, RepositoryError> {
    Ok(session.bearer(Utc::now())?)
}
