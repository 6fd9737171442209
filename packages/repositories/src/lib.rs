pub mod error;
pub mod reservation;
pub mod room;
pub mod user;

pub use error::RepositoryError;
pub use reservation::ReservationRepository;
pub use room::RoomRepository;
pub use user::UserRepository;

#[cfg(test)]
mod test_helpers;
