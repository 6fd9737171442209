use crate::utilities::stay_dates::stay_period;
use crate::{Desk, DeskOutcome};
use data_access_objects::Transport;
use models::forms::ReservationUpdateForm;
use models::rooms::Room;
use repositories::RoomRepository;
use services::validation::InputValidator;

impl<T: Transport> Desk<T> {
    pub async fn list_rooms(&self) -> DeskOutcome<Vec<Room>> {
        RoomRepository::list(self.dao()).await.into()
    }

    /// Rooms free for the whole stay. The dates go through the same checks
    /// as a booking before the server is asked.
    pub async fn available_rooms(&self, check_in: &str, check_out: &str) -> DeskOutcome<Vec<Room>> {
        let dates = ReservationUpdateForm {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        };
        if let Err(errors) = dates.validate() {
            return errors.into();
        }

        match stay_period(check_in, check_out) {
            Ok(period) => RoomRepository::list_available(self.dao(), &period).await.into(),
            Err(e) => e.into(),
        }
    }
}
