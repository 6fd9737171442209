pub mod requires_auth;
pub(crate) mod stay_dates;
