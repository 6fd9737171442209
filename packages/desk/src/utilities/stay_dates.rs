use crate::errors::ValidationErrorType;
use services::stay::StayPeriod;
use services::validation::field_validators::DATE_AFTER_DEFAULT_MESSAGE;

/// The stay as the server will see it: calendar dates only, with at least
/// one night between them. Times of day are dropped before counting, so a
/// same-day range is refused even when the hours differ.
pub(crate) fn stay_period(check_in: &str, check_out: &str) -> Result<StayPeriod, ValidationErrorType> {
    StayPeriod::parse(check_in, check_out)
        .map(|period| StayPeriod::new(period.check_in(), period.check_out()))
        .filter(|period| period.nights() > 0)
        .ok_or_else(|| ValidationErrorType::new("checkOut", DATE_AFTER_DEFAULT_MESSAGE))
}
