use data_access_objects::{RestDao, Transport};
use models::rooms::Room;
use services::stay::StayPeriod;
use uuid::Uuid;

use super::{room_path, RoomRepository};
use crate::error::RepositoryError;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl RoomRepository {
    pub async fn list<T: Transport>(dao: &RestDao<T>) -> Result<Vec<Room>, RepositoryError> {
        Ok(dao.get("rooms", &[], None).await?)
    }

    /// Rooms free for the whole stay.
    pub async fn list_available<T: Transport>(
        dao: &RestDao<T>,
        period: &StayPeriod,
    ) -> Result<Vec<Room>, RepositoryError> {
        let query = [
            ("checkIn", period.check_in().format(DATE_FORMAT).to_string()),
            ("checkOut", period.check_out().format(DATE_FORMAT).to_string()),
        ];
        let rooms: Vec<Room> = dao.get("rooms/available", &query, None).await?;
        tracing::debug!(count = rooms.len(), nights = period.nights(), "available rooms fetched");
        Ok(rooms)
    }

    pub async fn find_by_id<T: Transport>(dao: &RestDao<T>, id: Uuid) -> Result<Room, RepositoryError> {
        Ok(dao.get(&room_path(id), &[], None).await?)
    }
}
