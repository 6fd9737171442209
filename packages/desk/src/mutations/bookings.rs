use crate::errors::ValidationErrorType;
use crate::utilities::requires_auth::require_role;
use crate::utilities::stay_dates::stay_period;
use crate::{Desk, DeskOutcome};
use data_access_objects::Transport;
use models::forms::{optional_field, BookingForm, ReservationUpdateForm, WalkInForm};
use models::reservations::{GuestDetails, NewReservation, Reservation, ReservationChanges, ReservationStatus};
use models::users::Role;
use repositories::{ReservationRepository, RoomRepository};
use services::authentication::Session;
use services::stay::{quote_stay, RateQuote, StayPeriod};
use services::validation::InputValidator;
use uuid::Uuid;

impl<T: Transport> Desk<T> {
    /// Live price shown while the booking form is being filled in. Never
    /// fails: unreadable dates or an unknown rate give a zero quote.
    pub fn preview_booking(&self, form: &BookingForm, rate: Option<f64>) -> RateQuote {
        quote_stay(&form.check_in, &form.check_out, rate)
    }

    pub async fn book_room(&self, session: &mut Session, form: &BookingForm) -> DeskOutcome<Reservation> {
        if let Err(errors) = form.validate() {
            return errors.into();
        }
        if let Err(e) = require_role(session, Role::Guest) {
            return e.into();
        }

        let (room_id, period) = match parse_booking(&form.room_id, &form.check_in, &form.check_out) {
            Ok(parsed) => parsed,
            Err(e) => return e.into(),
        };
        self.place_reservation(session, room_id, period, None).await
    }

    /// Staff booking on behalf of a guest who has no account.
    pub async fn walk_in_booking(&self, session: &mut Session, form: &WalkInForm) -> DeskOutcome<Reservation> {
        if let Err(errors) = form.validate() {
            return errors.into();
        }
        if let Err(e) = require_role(session, Role::Staff) {
            return e.into();
        }

        let (room_id, period) = match parse_booking(&form.room_id, &form.check_in, &form.check_out) {
            Ok(parsed) => parsed,
            Err(e) => return e.into(),
        };
        let guest = GuestDetails {
            guest_name: form.guest_name.trim().to_string(),
            guest_email: optional_field(&form.guest_email),
            guest_phone: optional_field(&form.guest_phone),
            guest_nic: optional_field(&form.guest_nic),
        };
        self.place_reservation(session, room_id, period, Some(guest)).await
    }

    pub async fn update_reservation(
        &self,
        session: &mut Session,
        reservation: &Reservation,
        form: &ReservationUpdateForm,
    ) -> DeskOutcome<Reservation> {
        if let Err(errors) = form.validate() {
            return errors.into();
        }
        if let Err(e) = require_role(session, Role::Staff) {
            return e.into();
        }
        if reservation.status.is_final() {
            return ValidationErrorType::new(
                "status",
                format!("A {} reservation can no longer be changed", reservation.status),
            )
            .into();
        }

        let period = match stay_period(&form.check_in, &form.check_out) {
            Ok(period) => period,
            Err(e) => return e.into(),
        };
        let room = match RoomRepository::find_by_id(self.dao(), reservation.room_id).await {
            Ok(room) => room,
            Err(e) => return DeskOutcome::from_repository(session, e),
        };

        let preview = RateQuote::new(Some(&period), Some(room.price_per_night));
        let changes = ReservationChanges {
            check_in: period.check_in(),
            check_out: period.check_out(),
            nights: preview.nights,
            total_price: preview.total,
        };
        let result = ReservationRepository::update(self.dao(), session, reservation.id, &changes).await;
        match result {
            Ok(updated) => DeskOutcome::Success(adopt_server_total(&preview, updated)),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }

    /// Guests cancel their own bookings; the server checks ownership.
    pub async fn cancel_reservation(&self, session: &mut Session, id: Uuid) -> DeskOutcome<Reservation> {
        if let Err(e) = require_role(session, Role::Guest) {
            return e.into();
        }

        let result = ReservationRepository::set_status(self.dao(), session, id, ReservationStatus::Cancelled).await;
        match result {
            Ok(reservation) => DeskOutcome::Success(reservation),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }

    pub async fn set_reservation_status(
        &self,
        session: &mut Session,
        id: Uuid,
        status: ReservationStatus,
    ) -> DeskOutcome<Reservation> {
        if let Err(e) = require_role(session, Role::Staff) {
            return e.into();
        }

        let result = ReservationRepository::set_status(self.dao(), session, id, status).await;
        match result {
            Ok(reservation) => DeskOutcome::Success(reservation),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }

    async fn place_reservation(
        &self,
        session: &mut Session,
        room_id: Uuid,
        period: StayPeriod,
        guest: Option<GuestDetails>,
    ) -> DeskOutcome<Reservation> {
        let room = match RoomRepository::find_by_id(self.dao(), room_id).await {
            Ok(room) => room,
            Err(e) => return DeskOutcome::from_repository(session, e),
        };

        let preview = RateQuote::new(Some(&period), Some(room.price_per_night));
        let reservation = NewReservation {
            room_id,
            check_in: period.check_in(),
            check_out: period.check_out(),
            nights: preview.nights,
            total_price: preview.total,
            guest,
        };
        let result = ReservationRepository::create(self.dao(), session, &reservation).await;
        match result {
            Ok(created) => DeskOutcome::Success(adopt_server_total(&preview, created)),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }
}

fn parse_booking(room_id: &str, check_in: &str, check_out: &str) -> Result<(Uuid, StayPeriod), ValidationErrorType> {
    let room_id = Uuid::parse_str(room_id.trim())
        .map_err(|_| ValidationErrorType::new("roomId", "Please select a valid room"))?;
    Ok((room_id, stay_period(check_in, check_out)?))
}

/// The server's figure is the one that is charged.
fn adopt_server_total(preview: &RateQuote, mut reservation: Reservation) -> Reservation {
    if preview.differs_from(reservation.total_price) {
        tracing::info!(
            reservation_id = %reservation.id,
            preview_total = preview.total,
            server_total = reservation.total_price,
            "server total differs from preview"
        );
    }
    if reservation.nights == 0 {
        reservation.nights = StayPeriod::new(reservation.check_in, reservation.check_out).nights();
    }
    reservation
}
