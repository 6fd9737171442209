use crate::errors::{ApiError, AuthError, ValidationErrorType};
use data_access_objects::DaoError;
use repositories::RepositoryError;
use services::authentication::{Session, SessionError};
use services::validation::ValidationErrors;

const SESSION_REJECTED: &str = "Your session has expired. Please sign in again";

/// Result of a desk operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DeskOutcome<T> {
    Success(T),
    ValidationError(ValidationErrorType),
    AuthError(AuthError),
    ApiError(ApiError),
}

impl<T> DeskOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, DeskOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            DeskOutcome::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DeskOutcome<U> {
        match self {
            DeskOutcome::Success(value) => DeskOutcome::Success(f(value)),
            DeskOutcome::ValidationError(e) => DeskOutcome::ValidationError(e),
            DeskOutcome::AuthError(e) => DeskOutcome::AuthError(e),
            DeskOutcome::ApiError(e) => DeskOutcome::ApiError(e),
        }
    }

    /// Message to show for a failed outcome.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            DeskOutcome::Success(_) => None,
            DeskOutcome::ValidationError(e) => Some(e.message.as_str()),
            DeskOutcome::AuthError(e) => Some(e.message.as_str()),
            DeskOutcome::ApiError(e) => Some(e.message.as_str()),
        }
    }

    /// Like the `From<RepositoryError>` conversion, but also drops the
    /// session's credentials when the token expired or the server refused it.
    pub(crate) fn from_repository(session: &mut Session, err: RepositoryError) -> Self {
        match err {
            RepositoryError::Session(SessionError::Expired) => {
                session.invalidate("token expired");
                DeskOutcome::AuthError(AuthError::from(SessionError::Expired))
            }
            RepositoryError::Api(DaoError::Unauthorized(_)) => {
                session.invalidate("token rejected by server");
                DeskOutcome::AuthError(AuthError::new(SESSION_REJECTED))
            }
            other => other.into(),
        }
    }
}

impl<T> From<ValidationErrors> for DeskOutcome<T> {
    fn from(errors: ValidationErrors) -> Self {
        DeskOutcome::ValidationError(errors.into())
    }
}

impl<T> From<ValidationErrorType> for DeskOutcome<T> {
    fn from(error: ValidationErrorType) -> Self {
        DeskOutcome::ValidationError(error)
    }
}

impl<T> From<AuthError> for DeskOutcome<T> {
    fn from(error: AuthError) -> Self {
        DeskOutcome::AuthError(error)
    }
}

impl<T> From<RepositoryError> for DeskOutcome<T> {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Session(e) => DeskOutcome::AuthError(e.into()),
            RepositoryError::Api(DaoError::Unauthorized(message))
            | RepositoryError::Api(DaoError::Forbidden(message)) => {
                DeskOutcome::AuthError(AuthError::new(message))
            }
            RepositoryError::Api(e) => DeskOutcome::ApiError(e.into()),
        }
    }
}

impl<T> From<Result<T, RepositoryError>> for DeskOutcome<T> {
    fn from(result: Result<T, RepositoryError>) -> Self {
        match result {
            Ok(value) => DeskOutcome::Success(value),
            Err(e) => e.into(),
        }
    }
}
