use crate::authentication::token::AuthToken;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use models::forms::{BookingForm, RegisterForm, WalkInForm};
use models::users::{Role, User};
use uuid::Uuid;

pub fn jwt_expiring_at(expires_at: DateTime<Utc>) -> AuthToken {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({
            "sub": Uuid::new_v4().to_string(),
            "iat": Utc::now().timestamp(),
            "exp": expires_at.timestamp(),
        })
        .to_string(),
    );
    AuthToken::new(format!("{}.{}.signature", header, payload))
}

pub fn test_user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        username: format!("test_{}", role),
        full_name: "Test User".to_string(),
        email: Some("test@example.com".to_string()),
        phone: None,
        nic: None,
        role,
    }
}

pub fn valid_register_form() -> RegisterForm {
    RegisterForm {
        username: "new_guest".to_string(),
        password: "secret12".to_string(),
        confirm_password: "secret12".to_string(),
        full_name: "New Guest".to_string(),
        email: "guest@example.com".to_string(),
        phone: "0771234567".to_string(),
        nic: "901234567V".to_string(),
    }
}

pub fn booking_form(check_in: &str, check_out: &str) -> BookingForm {
    BookingForm {
        room_id: Uuid::new_v4().to_string(),
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
    }
}

pub fn valid_walk_in_form() -> WalkInForm {
    WalkInForm {
        guest_name: "Walk In".to_string(),
        guest_email: "".to_string(),
        guest_phone: "+94 77 123 4567".to_string(),
        guest_nic: "199012345678".to_string(),
        room_id: Uuid::new_v4().to_string(),
        check_in: "2025-06-01".to_string(),
        check_out: "2025-06-03".to_string(),
    }
}
