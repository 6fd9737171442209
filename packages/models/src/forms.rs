//! Raw form input, one record per screen. Every field holds whatever the user
//! typed; parsing happens only after validation passes.
//!
//! Missing and `null` JSON fields deserialize to the empty string so that a
//! partially filled form still validates instead of failing to parse.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub confirm_password: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub nic: String,
}

/// Guest self-service booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub room_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub check_in: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub check_out: String,
}

/// Staff booking for a guest standing at the desk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkInForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub guest_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub guest_email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub guest_phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub guest_nic: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub room_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub check_in: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub check_out: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationUpdateForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub check_in: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub check_out: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub room_number: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub room_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub price_per_night: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub capacity: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Admin user registry entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub nic: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub role: String,
}

/// `None` for a blank input, the trimmed text otherwise.
pub fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
