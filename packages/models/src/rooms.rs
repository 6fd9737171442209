use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => f.write_str("available"),
            RoomStatus::Occupied => f.write_str("occupied"),
            RoomStatus::Maintenance => f.write_str("maintenance"),
        }
    }
}

/// A room as returned by the inventory endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating or replacing a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
