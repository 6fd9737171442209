mod auth;
mod bookings;
mod rooms;
mod users;
