pub mod field_validators;
pub mod forms;
pub mod input_validator;

// Re-export common types and functions
pub use field_validators::{FieldError, FieldValidator};
pub use input_validator::{validate_form, FieldRule, FormValues, InputValidator, ValidationErrors};
