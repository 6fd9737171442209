mod read;
mod write;

/// Reservation endpoints. Guests see their own bookings, staff see all.
pub struct ReservationRepository;

pub(crate) fn reservation_path(id: uuid::Uuid) -> String {
    format!("reservations/{}", id)
}
