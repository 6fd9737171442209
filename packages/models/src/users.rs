use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Access level of an account. Staff can do everything a guest can, admins
/// everything staff can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Staff,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Guest, Role::Staff, Role::Admin];

    fn rank(self) -> u8 {
        match self {
            Role::Guest => 0,
            Role::Staff => 1,
            Role::Admin => 2,
        }
    }

    /// Whether an account holding `self` may act where `required` is needed.
    pub fn includes(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload for self-registration and for the admin user registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_includes_lower_roles() {
        assert!(Role::Admin.includes(Role::Staff));
        assert!(Role::Staff.includes(Role::Guest));
        assert!(Role::Staff.includes(Role::Staff));
        assert!(!Role::Guest.includes(Role::Staff));
        assert!(!Role::Staff.includes(Role::Admin));
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" staff ".parse::<Role>().unwrap(), Role::Staff);
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_new_user_omits_missing_contacts() {
        let user = NewUser {
            username: "front_desk".into(),
            password: "secret1".into(),
            full_name: "Front Desk".into(),
            email: None,
            phone: Some("0771234567".into()),
            nic: None,
            role: Role::Staff,
        };
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["fullName"], "Front Desk");
        assert_eq!(json["role"], "staff");
        assert!(json.get("email").is_none());
    }
}
