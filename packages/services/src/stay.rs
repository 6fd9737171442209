//! Night count and price preview for a stay.
//!
//! The figures here only preview what the reservation endpoints will charge:
//! once a reservation is created or updated, the total the server returns is
//! the one to show.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

const MILLIS_PER_NIGHT: i64 = 24 * 60 * 60 * 1000;

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Reads a date input. Accepts `YYYY-MM-DD`, a local date-time, or an RFC 3339
/// timestamp (taken in UTC). A bare date means midnight.
pub fn parse_stay_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
}

impl StayPeriod {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in: check_in.and_time(NaiveTime::MIN),
            check_out: check_out.and_time(NaiveTime::MIN),
        }
    }

    /// `None` when either side is blank or unreadable.
    pub fn parse(check_in: &str, check_out: &str) -> Option<Self> {
        Some(Self {
            check_in: parse_stay_date(check_in)?,
            check_out: parse_stay_date(check_out)?,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in.date()
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out.date()
    }

    /// Whole nights, rounding a partial day up. Zero unless check-out is
    /// strictly after check-in.
    pub fn nights(&self) -> u32 {
        let millis = (self.check_out - self.check_in).num_milliseconds();
        if millis <= 0 {
            return 0;
        }
        let nights = (millis + MILLIS_PER_NIGHT - 1) / MILLIS_PER_NIGHT;
        u32::try_from(nights).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    pub nights: u32,
    /// The nightly rate used, `None` when it was unknown or not a usable price.
    pub rate: Option<f64>,
    pub total: f64,
}

impl RateQuote {
    pub fn new(period: Option<&StayPeriod>, rate: Option<f64>) -> Self {
        let nights = period.map(StayPeriod::nights).unwrap_or(0);
        let rate = rate.filter(|rate| rate.is_finite() && *rate >= 0.0);
        let total = match rate {
            Some(rate) if nights > 0 => rate * f64::from(nights),
            _ => 0.0,
        };
        Self { nights, rate, total }
    }

    pub fn is_bookable(&self) -> bool {
        self.nights > 0
    }

    /// Whether a server-computed total disagrees with this preview by more
    /// than a cent.
    pub fn differs_from(&self, server_total: f64) -> bool {
        (self.total - server_total).abs() >= 0.01
    }
}

pub fn nights_between(check_in: &str, check_out: &str) -> u32 {
    StayPeriod::parse(check_in, check_out)
        .map(|period| period.nights())
        .unwrap_or(0)
}

pub fn quote_stay(check_in: &str, check_out: &str, rate: Option<f64>) -> RateQuote {
    RateQuote::new(StayPeriod::parse(check_in, check_out).as_ref(), rate)
}
