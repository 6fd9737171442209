mod reservations;
mod rooms;
mod users;
