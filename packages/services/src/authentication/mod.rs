pub mod claims;
pub mod session;
pub mod token;

pub use claims::Claims;
pub use session::{Session, SessionError};
pub use token::{AuthToken, TokenError};
