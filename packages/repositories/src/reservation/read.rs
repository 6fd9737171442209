use data_access_objects::{RestDao, Transport};
use models::reservations::Reservation;
use services::authentication::Session;

use super::ReservationRepository;
use crate::error::{bearer, RepositoryError};

impl ReservationRepository {
    /// Reservations belonging to the signed-in guest.
    pub async fn list_mine<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
    ) -> Result<Vec<Reservation>, RepositoryError> {
        Ok(dao.get("reservations/my", &[], Some(bearer(session)?)).await?)
    }

    pub async fn list_all<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
    ) -> Result<Vec<Reservation>, RepositoryError> {
        Ok(dao.get("reservations", &[], Some(bearer(session)?)).await?)
    }
}
