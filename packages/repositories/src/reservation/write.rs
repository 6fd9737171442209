use data_access_objects::{RestDao, Transport};
use models::reservations::{NewReservation, Reservation, ReservationChanges, ReservationStatus, StatusChange};
use services::authentication::Session;
use uuid::Uuid;

use super::{reservation_path, ReservationRepository};
use crate::error::{bearer, RepositoryError};

impl ReservationRepository {
    /// The returned reservation carries the total the server charged.
    pub async fn create<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
        reservation: &NewReservation,
    ) -> Result<Reservation, RepositoryError> {
        let created: Reservation = dao
            .post("reservations", reservation, Some(bearer(session)?))
            .await?;
        tracing::info!(
            reservation_id = %created.id,
            room_id = %created.room_id,
            total_price = created.total_price,
            "reservation created"
        );
        Ok(created)
    }

    pub async fn update<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
        id: Uuid,
        changes: &ReservationChanges,
    ) -> Result<Reservation, RepositoryError> {
        let updated: Reservation = dao
            .put(&reservation_path(id), changes, Some(bearer(session)?))
            .await?;
        tracing::info!(reservation_id = %id, total_price = updated.total_price, "reservation updated");
        Ok(updated)
    }

    pub async fn set_status<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<Reservation, RepositoryError> {
        let path = format!("{}/status", reservation_path(id));
        let updated: Reservation = dao
            .patch(&path, &StatusChange { status }, Some(bearer(session)?))
            .await?;
        tracing::info!(reservation_id = %id, %status, "reservation status changed");
        Ok(updated)
    }
}
