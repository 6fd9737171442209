use std::fmt;

/// Everything that can go wrong between building a request and decoding its
/// response. Messages from the server are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaoError {
    Config(String),
    /// Request never produced a response (connection, timeout, TLS)
    Transport(String),
    /// 401: the token is missing, expired or revoked
    Unauthorized(String),
    /// 403: signed in but not allowed
    Forbidden(String),
    NotFound(String),
    /// Any other 4xx, usually a server-side validation message
    Rejected { status: u16, message: String },
    Server { status: u16, message: String },
    /// 2xx response whose body did not have the expected shape
    Decode(String),
}

impl DaoError {
    pub fn status(&self) -> Option<u16> {
        match self {
            DaoError::Unauthorized(_) => Some(401),
            DaoError::Forbidden(_) => Some(403),
            DaoError::NotFound(_) => Some(404),
            DaoError::Rejected { status, .. } | DaoError::Server { status, .. } => Some(*status),
            DaoError::Config(_) | DaoError::Transport(_) | DaoError::Decode(_) => None,
        }
    }
}

impl fmt::Display for DaoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaoError::Config(message) => write!(f, "invalid API configuration: {}", message),
            DaoError::Transport(message) => write!(f, "could not reach the server: {}", message),
            DaoError::Unauthorized(message)
            | DaoError::Forbidden(message)
            | DaoError::NotFound(message) => f.write_str(message),
            DaoError::Rejected { message, .. } | DaoError::Server { message, .. } => {
                f.write_str(message)
            }
            DaoError::Decode(message) => write!(f, "unexpected response from server: {}", message),
        }
    }
}

impl std::error::Error for DaoError {}

impl From<reqwest::Error> for DaoError {
    fn from(e: reqwest::Error) -> Self {
        DaoError::Transport(e.to_string())
    }
}

impl From<url::ParseError> for DaoError {
    fn from(e: url::ParseError) -> Self {
        DaoError::Config(e.to_string())
    }
}
