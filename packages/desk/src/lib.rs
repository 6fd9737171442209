//! Front-desk operations: each one validates its form, checks who is asking,
//! calls the API and reports back as a [`DeskOutcome`].

pub mod errors;
pub mod mutations;
pub mod outcome;
pub mod queries;
pub mod utilities;

#[cfg(test)]
pub mod test_helpers;

use data_access_objects::{RestDao, Transport};

pub use errors::{ApiError, AuthError, ValidationErrorType};
pub use outcome::DeskOutcome;

pub struct Desk<T> {
    dao: RestDao<T>,
}

impl<T: Transport> Desk<T> {
    pub fn new(transport: T) -> Self {
        Self {
            dao: RestDao::new(transport),
        }
    }

    pub fn dao(&self) -> &RestDao<T> {
        &self.dao
    }
}
