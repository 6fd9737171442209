pub mod authentication;
pub mod stay;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use authentication::*;
pub use stay::*;
pub use validation::*;
