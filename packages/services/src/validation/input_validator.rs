use super::field_validators::FieldError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Failing fields and their messages, kept in the order the rules ran.
/// A field holds at most one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`. A second message for the same field
    /// replaces the first but keeps its position.
    pub fn add_error(&mut self, field: &str, message: String) {
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field.to_string(), message)),
        }
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, message) in other.entries {
            self.add_error(&field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    /// The error a form shows first.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn first_message(&self) -> Option<&str> {
        self.first().map(|(_, message)| message)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        self.entries
            .iter()
            .map(|(_, message)| message.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

type RuleCheck<F> = Box<dyn Fn(&F) -> Result<(), FieldError> + Send + Sync>;

/// A check bound to the field its message is reported under. The check sees
/// the whole form so it can compare fields.
pub struct FieldRule<F: ?Sized> {
    field: &'static str,
    check: RuleCheck<F>,
}

impl<F: ?Sized> FieldRule<F> {
    pub fn new<C>(field: &'static str, check: C) -> Self
    where
        C: Fn(&F) -> Result<(), FieldError> + Send + Sync + 'static,
    {
        Self {
            field,
            check: Box::new(check),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn check(&self, values: &F) -> Result<(), FieldError> {
        (self.check)(values)
    }
}

impl<F: ?Sized> fmt::Debug for FieldRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule").field("field", &self.field).finish()
    }
}

impl FieldRule<FormValues> {
    /// Rule over a single named value of an untyped form.
    pub fn value<C>(field: &'static str, check: C) -> Self
    where
        C: Fn(&str) -> Result<(), FieldError> + Send + Sync + 'static,
    {
        Self::new(field, move |values: &FormValues| check(values.get(field)))
    }
}

/// Runs every rule in order and collects one message per failing field.
pub fn validate_form<F: ?Sized>(rules: &[FieldRule<F>], values: &F) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for rule in rules {
        if let Err(error) = rule.check(values) {
            errors.add_error(rule.field(), error.to_string());
        }
    }
    errors.into_result()
}

/// Untyped form input keyed by field name. Missing and `null` entries read as
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormValues(HashMap<String, Option<String>>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: &str) {
        self.0.insert(field.to_string(), Some(value.to_string()));
    }

    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).and_then(|value| value.as_deref()).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), Some(value.into())))
                .collect(),
        )
    }
}
