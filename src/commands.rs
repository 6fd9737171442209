use anyhow::{Context, Result};
use clap::ValueEnum;
use data_access_objects::Transport;
use desk::{Desk, DeskOutcome, ValidationErrorType};
use models::forms::{
    BookingForm, LoginForm, RegisterForm, ReservationUpdateForm, RoomForm, UserForm, WalkInForm,
};
use models::reservations::Reservation;
use models::rooms::Room;
use serde::de::DeserializeOwned;
use services::authentication::Session;
use services::stay::{quote_stay, RateQuote};
use services::validation::InputValidator;
use std::path::Path;
use std::process::ExitCode;

/// Forms that `validate` knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormKind {
    Login,
    Register,
    Booking,
    WalkIn,
    ReservationUpdate,
    Room,
    User,
}

fn check<F: DeserializeOwned + InputValidator>(json: &str) -> Result<Option<ValidationErrorType>> {
    let form: F = serde_json::from_str(json).context("form is not a JSON object of text fields")?;
    Ok(form.validate().err().map(ValidationErrorType::from))
}

/// First failing field of the form, if any.
pub fn first_error(kind: FormKind, json: &str) -> Result<Option<ValidationErrorType>> {
    match kind {
        FormKind::Login => check::<LoginForm>(json),
        FormKind::Register => check::<RegisterForm>(json),
        FormKind::Booking => check::<BookingForm>(json),
        FormKind::WalkIn => check::<WalkInForm>(json),
        FormKind::ReservationUpdate => check::<ReservationUpdateForm>(json),
        FormKind::Room => check::<RoomForm>(json),
        FormKind::User => check::<UserForm>(json),
    }
}

pub fn validate(kind: FormKind, path: &Path) -> Result<ExitCode> {
    let json = std::fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
    match first_error(kind, &json)? {
        Some(error) => {
            tracing::debug!(field = %error.field, "form rejected");
            println!("{}", error);
            Ok(ExitCode::FAILURE)
        }
        None => {
            println!("valid");
            Ok(ExitCode::SUCCESS)
        }
    }
}

pub fn format_quote(quote: &RateQuote) -> String {
    let nights = match quote.nights {
        1 => "1 night".to_string(),
        n => format!("{} nights", n),
    };
    match quote.rate {
        Some(_) => format!("{}, total {:.2}", nights, quote.total),
        None => nights,
    }
}

pub fn quote(check_in: &str, check_out: &str, rate: Option<f64>) -> ExitCode {
    let quote = quote_stay(check_in, check_out, rate);
    println!("{}", format_quote(&quote));
    ExitCode::SUCCESS
}

pub fn format_room(room: &Room) -> String {
    format!(
        "{}  {:<6} {:<12} {:>10.2}/night  sleeps {}  {}",
        room.id, room.room_number, room.room_type, room.price_per_night, room.capacity, room.status
    )
}

pub fn format_reservation(reservation: &Reservation) -> String {
    format!(
        "reservation {} for {} to {}: {} nights, total {:.2} ({})",
        reservation.id,
        reservation.check_in,
        reservation.check_out,
        reservation.nights,
        reservation.total_price,
        reservation.status
    )
}

/// Prints the value or the outcome's single error message.
fn report<T>(outcome: DeskOutcome<T>, print: impl FnOnce(T)) -> ExitCode {
    match outcome {
        DeskOutcome::Success(value) => {
            print(value);
            ExitCode::SUCCESS
        }
        failed => {
            eprintln!("Error: {}", failed.error_message().unwrap_or("request failed"));
            ExitCode::FAILURE
        }
    }
}

pub async fn rooms<T: Transport>(desk: &Desk<T>, check_in: Option<String>, check_out: Option<String>) -> ExitCode {
    let outcome = match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => desk.available_rooms(&check_in, &check_out).await,
        _ => desk.list_rooms().await,
    };
    report(outcome, |rooms| {
        for room in &rooms {
            println!("{}", format_room(room));
        }
    })
}

pub async fn book<T: Transport>(desk: &Desk<T>, credentials: LoginForm, booking: BookingForm) -> ExitCode {
    let mut session = Session::anonymous();
    let signed_in = desk.login(&mut session, &credentials).await;
    if !signed_in.is_success() {
        return report(signed_in, |_| ());
    }

    let outcome = desk.book_room(&mut session, &booking).await;
    desk.logout(&mut session);
    report(outcome, |reservation| println!("{}", format_reservation(&reservation)))
}
