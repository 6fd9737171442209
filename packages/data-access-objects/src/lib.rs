pub mod config;
pub mod error;
pub mod rest;
pub mod transport;

pub use config::ApiConfig;
pub use error::DaoError;
pub use rest::RestDao;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, ReqwestTransport, Transport};
