use async_trait::async_trait;
use data_access_objects::{ApiRequest, ApiResponse, DaoError, RestDao, Transport};
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

pub fn dao_with(transport: MockApi) -> RestDao<MockApi> {
    RestDao::new(transport)
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

pub fn signed_in(role: Role) -> Session {
    let mut session = Session::anonymous();
    session.sign_in(AuthToken::new(TEST_TOKEN.to_string()), test_user(role));
    session
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

pub fn reservation_json(id: Uuid, total_price: f64, status: &str) -> Value {
    json!({
        "id": id,
        "roomId": Uuid::new_v4(),
        "guestName": "Test Guest",
        "checkIn": "2025-06-01",
        "checkOut": "2025-06-04",
        "nights": 3,
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
