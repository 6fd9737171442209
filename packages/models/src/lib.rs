pub mod forms;
pub mod reservations;
pub mod rooms;
pub mod users;

pub mod prelude {
    pub use crate::reservations::{GuestDetails, NewReservation, Reservation, ReservationChanges, ReservationStatus, StatusChange};
    pub use crate::rooms::{NewRoom, Room, RoomStatus};
    pub use crate::users::{AuthResponse, Credentials, NewUser, Role, User};
}
