use crate::Desk;
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use data_access_objects::{ApiRequest, ApiResponse, DaoError, Transport};
use models::users::{Role, User};
use serde_json::{json, Value};
use services::authentication::{AuthToken, Session};
use uuid::Uuid;

pub const TEST_TOKEN: &str = "test-access-token";

mockall::mock! {
    pub Api {}

    #[async_trait]
    impl Transport for Api {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, DaoError>;
    }
}

pub fn desk_with(transport: MockApi) -> Desk<MockApi> {
    Desk::new(transport)
}

/// A transport that fails the test if anything is sent.
pub fn silent_transport() -> MockApi {
    let mut transport = MockApi::new();
    transport.expect_send().times(0);
    transport
}

pub fn jwt_expiring_at(expires_at: DateTime<Utc>) -> AuthToken {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "exp": expires_at.timestamp() }).to_string());
    AuthToken::new(format!("{}.{}.signature", header, payload))
}

pub fn test_user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        username: format!("test_{}", role),
        full_name: "Test User".to_string(),
        email: None,
        phone: None,
        nic: None,
        role,
    }
}

pub fn signed_in_with(token: AuthToken, role: Role) -> Session {
    let mut session = Session::anonymous();
    session.sign_in(token, test_user(role));
    session
}

pub fn signed_in(role: Role) -> Session {
    signed_in_with(AuthToken::new(TEST_TOKEN.to_string()), role)
}

pub fn room_json(id: Uuid, price_per_night: f64) -> Value {
    json!({
        "id": id,
        "roomNumber": "101",
        "roomType": "Deluxe",
        "pricePerNight": price_per_night,
        "capacity": 2,
        "status": "available"
    })
}

pub fn reservation_json(id: Uuid, room_id: Uuid, total_price: f64, status: &str) -> Value {
    json!({
        "id": id,
        "roomId": room_id,
        "guestName": "Test Guest",
        "checkIn": "2025-06-01",
        "checkOut": "2025-06-04",
        "totalPrice": total_price,
        "status": status
    })
}

pub fn user_json(id: Uuid, username: &str, role: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "fullName": "Test User",
        "role": role
    })
}
