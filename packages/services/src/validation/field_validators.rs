use crate::stay::parse_stay_date;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// 9 digits followed by V or X (old NIC) or 12 digits (new NIC).
pub const NIC_PATTERN: &str = r"^(?:[0-9]{9}[VvXx]|[0-9]{12})$";
pub const PHONE_PATTERN: &str = r"^[0-9 +\-]{7,15}$";
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const USERNAME_PATTERN: &str = r"^[A-Za-z0-9_]+$";

pub const DATE_AFTER_DEFAULT_MESSAGE: &str = "Check-out date must be after check-in date";

static NIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(NIC_PATTERN).expect("NIC pattern compiles"));
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(USERNAME_PATTERN).expect("username pattern compiles"));

/// A single failed field check. `Display` gives the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Value is empty or blank
    Required { label: String },
    /// Username is shorter than three characters
    UsernameTooShort,
    /// Username contains something other than letters, digits and underscores
    UsernameInvalidCharacters,
    /// Password is shorter than the configured minimum
    PasswordTooShort { min: usize },
    InvalidEmail,
    InvalidNic,
    InvalidPhone,
    InvalidDate { label: String },
    /// The later date is on or before the earlier one
    DateNotAfter { message: String },
    NotPositive { label: String },
    NotWholeNumber { label: String },
    /// Value differs from the field it must repeat
    Mismatch { message: String },
    NotAllowed { label: String, allowed: Vec<String> },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required { label } => write!(f, "{} is required", label),
            FieldError::UsernameTooShort => write!(
                f,
                "Username must be at least {} characters",
                USERNAME_MIN_LENGTH
            ),
            FieldError::UsernameInvalidCharacters => write!(
                f,
                "Username can only contain letters, numbers and underscores"
            ),
            FieldError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters", min)
            }
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
            FieldError::InvalidNic => write!(
                f,
                "Invalid NIC number. Use 9 digits followed by V or X, or 12 digits"
            ),
            FieldError::InvalidPhone => write!(f, "Please enter a valid phone number"),
            FieldError::InvalidDate { label } => write!(f, "{} must be a valid date", label),
            FieldError::DateNotAfter { message } => f.write_str(message),
            FieldError::NotPositive { label } => write!(f, "{} must be a positive number", label),
            FieldError::NotWholeNumber { label } => write!(f, "{} must be a whole number", label),
            FieldError::Mismatch { message } => f.write_str(message),
            FieldError::NotAllowed { label, allowed } => {
                write!(f, "{} must be one of: {}", label, allowed.join(", "))
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// The validator catalogue. Every check is pure; optional fields pass when
/// blank, required ones say so.
pub struct FieldValidator;

impl FieldValidator {
    /// Blank is reported as missing. Surrounding spaces are not stripped and
    /// fail the character check.
    pub fn username(value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return Err(FieldError::Required { label: "Username".to_string() });
        }
        if value.chars().count() < USERNAME_MIN_LENGTH {
            return Err(FieldError::UsernameTooShort);
        }
        if !USERNAME_REGEX.is_match(value) {
            return Err(FieldError::UsernameInvalidCharacters);
        }
        Ok(())
    }

    /// Password with the default minimum length.
    pub fn password(value: &str) -> Result<(), FieldError> {
        Self::password_with_min(value, PASSWORD_MIN_LENGTH)
    }

    pub fn password_with_min(value: &str, min: usize) -> Result<(), FieldError> {
        if value.is_empty() {
            return Err(FieldError::Required { label: "Password".to_string() });
        }
        if value.chars().count() < min {
            return Err(FieldError::PasswordTooShort { min });
        }
        Ok(())
    }

    pub fn required(value: &str, label: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return Err(FieldError::Required { label: label.to_string() });
        }
        Ok(())
    }

    pub fn email(value: &str) -> Result<(), FieldError> {
        let value = value.trim();
        if value.is_empty() || EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(FieldError::InvalidEmail)
        }
    }

    pub fn nic(value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() || NIC_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(FieldError::InvalidNic)
        }
    }

    pub fn phone(value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return Ok(());
        }
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        if PHONE_REGEX.is_match(&compact) {
            Ok(())
        } else {
            Err(FieldError::InvalidPhone)
        }
    }

    /// Blank passes; anything else must read as a calendar date.
    pub fn date(value: &str, label: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() || parse_stay_date(value).is_some() {
            Ok(())
        } else {
            Err(FieldError::InvalidDate { label: label.to_string() })
        }
    }

    /// Fails only when both dates are present and readable and `later` is not
    /// strictly after `earlier`.
    pub fn date_after(later: &str, earlier: &str, message: Option<&str>) -> Result<(), FieldError> {
        let (Some(later), Some(earlier)) = (parse_stay_date(later), parse_stay_date(earlier)) else {
            return Ok(());
        };
        if later <= earlier {
            return Err(FieldError::DateNotAfter {
                message: message.unwrap_or(DATE_AFTER_DEFAULT_MESSAGE).to_string(),
            });
        }
        Ok(())
    }

    pub fn positive_number(value: &str, label: &str) -> Result<(), FieldError> {
        match value.trim().parse::<f64>() {
            Ok(number) if number.is_finite() && number > 0.0 => Ok(()),
            _ => Err(FieldError::NotPositive { label: label.to_string() }),
        }
    }

    pub fn positive_integer(value: &str, label: &str) -> Result<(), FieldError> {
        Self::positive_number(value, label)?;
        if value.trim().parse::<u32>().is_err() {
            return Err(FieldError::NotWholeNumber { label: label.to_string() });
        }
        Ok(())
    }

    pub fn matches(value: &str, other: &str, message: &str) -> Result<(), FieldError> {
        if value == other {
            Ok(())
        } else {
            Err(FieldError::Mismatch { message: message.to_string() })
        }
    }

    pub fn one_of(value: &str, allowed: &[&str], label: &str) -> Result<(), FieldError> {
        let value = value.trim();
        if allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
            Ok(())
        } else {
            Err(FieldError::NotAllowed {
                label: label.to_string(),
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert!(FieldValidator::username("abc").is_ok());
        assert!(FieldValidator::username("front_desk_01").is_ok());

        assert_eq!(
            FieldValidator::username("  ").unwrap_err().to_string(),
            "Username is required"
        );
        assert_eq!(FieldValidator::username("ab"), Err(FieldError::UsernameTooShort));
        assert_eq!(
            FieldValidator::username(" abc"),
            Err(FieldError::UsernameInvalidCharacters)
        );
        assert_eq!(
            FieldValidator::username("abc "),
            Err(FieldError::UsernameInvalidCharacters)
        );
        assert_eq!(
            FieldValidator::username("john doe"),
            Err(FieldError::UsernameInvalidCharacters)
        );
        assert_eq!(
            FieldValidator::username("jöhn"),
            Err(FieldError::UsernameInvalidCharacters)
        );
    }

    #[test]
    fn test_password_length() {
        assert_eq!(
            FieldValidator::password("abcde"),
            Err(FieldError::PasswordTooShort { min: 6 })
        );
        assert!(FieldValidator::password("abcdef").is_ok());
        assert_eq!(
            FieldValidator::password("").unwrap_err().to_string(),
            "Password is required"
        );
        assert_eq!(
            FieldValidator::password_with_min("abcdef", 8).unwrap_err().to_string(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(FieldValidator::required("", "X").unwrap_err().to_string(), "X is required");
        assert_eq!(FieldValidator::required("  ", "X").unwrap_err().to_string(), "X is required");
        assert!(FieldValidator::required("ok", "X").is_ok());
    }

    #[test]
    fn test_email_is_optional() {
        assert!(FieldValidator::email("").is_ok());
        assert!(FieldValidator::email("guest@hotel.lk").is_ok());
        assert_eq!(FieldValidator::email("guest@hotel"), Err(FieldError::InvalidEmail));
        assert_eq!(FieldValidator::email("not an@email.com"), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_nic_formats() {
        assert!(FieldValidator::nic("").is_ok());
        assert!(FieldValidator::nic("199012345678").is_ok());
        assert!(FieldValidator::nic("901234567V").is_ok());
        assert!(FieldValidator::nic("901234567x").is_ok());
        assert_eq!(FieldValidator::nic("12345"), Err(FieldError::InvalidNic));
        assert_eq!(FieldValidator::nic("9012345678V"), Err(FieldError::InvalidNic));
        assert_eq!(FieldValidator::nic("1990123456789"), Err(FieldError::InvalidNic));
        assert_eq!(FieldValidator::nic(" 901234567V"), Err(FieldError::InvalidNic));
        assert_eq!(FieldValidator::nic("901234567V "), Err(FieldError::InvalidNic));
    }

    #[test]
    fn test_phone() {
        assert!(FieldValidator::phone("").is_ok());
        assert!(FieldValidator::phone("0771234567").is_ok());
        assert!(FieldValidator::phone("+94 77 123 4567").is_ok());
        assert!(FieldValidator::phone("077-123-4567").is_ok());
        assert_eq!(FieldValidator::phone("abc"), Err(FieldError::InvalidPhone));
        assert_eq!(FieldValidator::phone("12345"), Err(FieldError::InvalidPhone));
        assert_eq!(FieldValidator::phone("1234567890123456"), Err(FieldError::InvalidPhone));
    }

    #[test]
    fn test_date_after_compares_dates() {
        assert_eq!(
            FieldValidator::date_after("2025-01-01", "2025-01-02", None)
                .unwrap_err()
                .to_string(),
            DATE_AFTER_DEFAULT_MESSAGE
        );
        assert!(FieldValidator::date_after("2025-01-02", "2025-01-02", None).is_err());
        assert!(FieldValidator::date_after("2025-01-03", "2025-01-02", None).is_ok());
        assert!(FieldValidator::date_after("2025-02-01", "2025-01-31T12:00", None).is_ok());
        assert!(FieldValidator::date_after("", "2025-01-02", None).is_ok());
        assert_eq!(
            FieldValidator::date_after("2025-01-01", "2025-01-02", Some("End must follow start"))
                .unwrap_err()
                .to_string(),
            "End must follow start"
        );
    }

    #[test]
    fn test_date() {
        assert!(FieldValidator::date("", "Check-in date").is_ok());
        assert!(FieldValidator::date("2025-02-28", "Check-in date").is_ok());
        assert_eq!(
            FieldValidator::date("2025-02-30", "Check-in date").unwrap_err().to_string(),
            "Check-in date must be a valid date"
        );
    }

    #[test]
    fn test_positive_number() {
        assert!(FieldValidator::positive_number("15000", "Price").is_ok());
        assert!(FieldValidator::positive_number(" 99.5 ", "Price").is_ok());
        assert_eq!(
            FieldValidator::positive_number("-5", "Price").unwrap_err().to_string(),
            "Price must be a positive number"
        );
        assert!(FieldValidator::positive_number("0", "Price").is_err());
        assert!(FieldValidator::positive_number("abc", "Price").is_err());
        assert!(FieldValidator::positive_number("NaN", "Price").is_err());
        assert!(FieldValidator::positive_number("inf", "Price").is_err());
    }

    #[test]
    fn test_positive_integer() {
        assert!(FieldValidator::positive_integer("2", "Capacity").is_ok());
        assert_eq!(
            FieldValidator::positive_integer("2.5", "Capacity").unwrap_err().to_string(),
            "Capacity must be a whole number"
        );
        assert!(matches!(
            FieldValidator::positive_integer("0", "Capacity"),
            Err(FieldError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_one_of() {
        assert!(FieldValidator::one_of("Staff", &["guest", "staff", "admin"], "Role").is_ok());
        assert_eq!(
            FieldValidator::one_of("owner", &["guest", "staff", "admin"], "Role")
                .unwrap_err()
                .to_string(),
            "Role must be one of: guest, staff, admin"
        );
    }

    #[test]
    fn test_validators_are_idempotent() {
        for _ in 0..2 {
            assert_eq!(FieldValidator::username("ab"), Err(FieldError::UsernameTooShort));
            assert!(FieldValidator::nic("901234567V").is_ok());
        }
    }
}
