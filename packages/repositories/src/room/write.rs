use data_access_objects::{RestDao, Transport};
use models::rooms::{NewRoom, Room};
use services::authentication::Session;
use uuid::Uuid;

use super::{room_path, RoomRepository};
use crate::error::{bearer, RepositoryError};

impl RoomRepository {
    pub async fn create<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
        room: &NewRoom,
    ) -> Result<Room, RepositoryError> {
        let created: Room = dao.post("rooms", room, Some(bearer(session)?)).await?;
        tracing::info!(room_id = %created.id, room_number = %created.room_number, "room created");
        Ok(created)
    }

    pub async fn update<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
        id: Uuid,
        room: &NewRoom,
    ) -> Result<Room, RepositoryError> {
        let updated: Room = dao.put(&room_path(id), room, Some(bearer(session)?)).await?;
        tracing::info!(room_id = %updated.id, "room updated");
        Ok(updated)
    }

    pub async fn delete<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        dao.delete(&room_path(id), Some(bearer(session)?)).await?;
        tracing::info!(room_id = %id, "room deleted");
        Ok(())
    }
}
