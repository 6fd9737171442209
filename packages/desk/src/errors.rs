use data_access_objects::DaoError;
use services::authentication::SessionError;
use services::validation::ValidationErrors;
use std::fmt;

/// The first failing field of a form. Screens show one message at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrorType {
    pub field: String,
    pub message: String,
}

impl ValidationErrorType {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for ValidationErrorType {
    fn from(errors: ValidationErrors) -> Self {
        match errors.first() {
            Some((field, message)) => ValidationErrorType::new(field, message),
            None => ValidationErrorType::new("", "Invalid input"),
        }
    }
}

impl fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<SessionError> for AuthError {
    fn from(e: SessionError) -> Self {
        AuthError { message: e.to_string() }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl From<DaoError> for ApiError {
    fn from(e: DaoError) -> Self {
        ApiError {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}
