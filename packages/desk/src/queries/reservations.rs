use crate::utilities::requires_auth::require_role;
use crate::{Desk, DeskOutcome};
use data_access_objects::Transport;
use models::reservations::Reservation;
use models::users::Role;
use repositories::ReservationRepository;
use services::authentication::Session;

impl<T: Transport> Desk<T> {
    pub async fn my_reservations(&self, session: &mut Session) -> DeskOutcome<Vec<Reservation>> {
        if let Err(e) = require_role(session, Role::Guest) {
            return e.into();
        }

        let result = ReservationRepository::list_mine(self.dao(), session).await;
        match result {
            Ok(reservations) => DeskOutcome::Success(reservations),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }

    /// Every reservation in the hotel, for the front desk.
    pub async fn all_reservations(&self, session: &mut Session) -> DeskOutcome<Vec<Reservation>> {
        if let Err(e) = require_role(session, Role::Staff) {
            return e.into();
        }

        let result = ReservationRepository::list_all(self.dao(), session).await;
        match result {
            Ok(reservations) => DeskOutcome::Success(reservations),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }
}
