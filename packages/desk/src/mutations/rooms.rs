use crate::errors::ValidationErrorType;
use crate::utilities::requires_auth::require_role;
use crate::{Desk, DeskOutcome};
use data_access_objects::Transport;
use models::forms::{optional_field, RoomForm};
use models::rooms::{NewRoom, Room};
use models::users::Role;
use repositories::RoomRepository;
use services::authentication::Session;
use services::validation::InputValidator;
use uuid::Uuid;

impl<T: Transport> Desk<T> {
    /// Creates a room when `id` is `None`, replaces it otherwise.
    pub async fn save_room(&self, session: &mut Session, id: Option<Uuid>, form: &RoomForm) -> DeskOutcome<Room> {
        if let Err(errors) = form.validate() {
            return errors.into();
        }
        if let Err(e) = require_role(session, Role::Staff) {
            return e.into();
        }

        let room = match new_room(form) {
            Ok(room) => room,
            Err(e) => return e.into(),
        };
        let result = match id {
            Some(id) => RoomRepository::update(self.dao(), session, id, &room).await,
            None => RoomRepository::create(self.dao(), session, &room).await,
        };
        match result {
            Ok(saved) => DeskOutcome::Success(saved),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }

    pub async fn delete_room(&self, session: &mut Session, id: Uuid) -> DeskOutcome<()> {
        if let Err(e) = require_role(session, Role::Admin) {
            return e.into();
        }

        let result = RoomRepository::delete(self.dao(), session, id).await;
        match result {
            Ok(()) => DeskOutcome::Success(()),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }
}

fn new_room(form: &RoomForm) -> Result<NewRoom, ValidationErrorType> {
    let price_per_night = form
        .price_per_night
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationErrorType::new("pricePerNight", "Price per night must be a positive number"))?;
    let capacity = form
        .capacity
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationErrorType::new("capacity", "Capacity must be a positive number"))?;

    Ok(NewRoom {
        room_number: form.room_number.trim().to_string(),
        room_type: form.room_type.trim().to_string(),
        price_per_night,
        capacity,
        description: optional_field(&form.description),
    })
}
