use super::field_validators::{FieldError, FieldValidator};
use super::input_validator::{validate_form, FieldRule, InputValidator, ValidationErrors};
use models::forms::{
    BookingForm, LoginForm, RegisterForm, ReservationUpdateForm, RoomForm, UserForm, WalkInForm,
};
use models::users::Role;

/// Check-in and check-out rules shared by every form that carries a stay.
fn stay_checks(check_in: &str, check_out: &str) -> (Result<(), FieldError>, Result<(), FieldError>) {
    let check_in_result = FieldValidator::required(check_in, "Check-in date")
        .and_then(|_| FieldValidator::date(check_in, "Check-in date"));
    let check_out_result = FieldValidator::required(check_out, "Check-out date")
        .and_then(|_| FieldValidator::date(check_out, "Check-out date"))
        .and_then(|_| FieldValidator::date_after(check_out, check_in, None));
    (check_in_result, check_out_result)
}

pub fn login_rules() -> Vec<FieldRule<LoginForm>> {
    vec![
        FieldRule::new("username", |form: &LoginForm| {
            FieldValidator::required(&form.username, "Username")
        }),
        FieldRule::new("password", |form: &LoginForm| {
            FieldValidator::required(&form.password, "Password")
        }),
    ]
}

pub fn register_rules() -> Vec<FieldRule<RegisterForm>> {
    vec![
        FieldRule::new("username", |form: &RegisterForm| FieldValidator::username(&form.username)),
        FieldRule::new("password", |form: &RegisterForm| FieldValidator::password(&form.password)),
        FieldRule::new("confirmPassword", |form: &RegisterForm| {
            FieldValidator::matches(&form.confirm_password, &form.password, "Passwords do not match")
        }),
        FieldRule::new("fullName", |form: &RegisterForm| {
            FieldValidator::required(&form.full_name, "Full name")
        }),
        FieldRule::new("email", |form: &RegisterForm| FieldValidator::email(&form.email)),
        FieldRule::new("phone", |form: &RegisterForm| FieldValidator::phone(&form.phone)),
        FieldRule::new("nic", |form: &RegisterForm| FieldValidator::nic(&form.nic)),
    ]
}

pub fn booking_rules() -> Vec<FieldRule<BookingForm>> {
    vec![
        FieldRule::new("roomId", |form: &BookingForm| FieldValidator::required(&form.room_id, "Room")),
        FieldRule::new("checkIn", |form: &BookingForm| stay_checks(&form.check_in, &form.check_out).0),
        FieldRule::new("checkOut", |form: &BookingForm| stay_checks(&form.check_in, &form.check_out).1),
    ]
}

pub fn walk_in_rules() -> Vec<FieldRule<WalkInForm>> {
    vec![
        FieldRule::new("guestName", |form: &WalkInForm| {
            FieldValidator::required(&form.guest_name, "Guest name")
        }),
        FieldRule::new("guestEmail", |form: &WalkInForm| FieldValidator::email(&form.guest_email)),
        FieldRule::new("guestPhone", |form: &WalkInForm| {
            FieldValidator::required(&form.guest_phone, "Phone number")
                .and_then(|_| FieldValidator::phone(&form.guest_phone))
        }),
        FieldRule::new("guestNic", |form: &WalkInForm| {
            FieldValidator::required(&form.guest_nic, "NIC")
                .and_then(|_| FieldValidator::nic(&form.guest_nic))
        }),
        FieldRule::new("roomId", |form: &WalkInForm| FieldValidator::required(&form.room_id, "Room")),
        FieldRule::new("checkIn", |form: &WalkInForm| stay_checks(&form.check_in, &form.check_out).0),
        FieldRule::new("checkOut", |form: &WalkInForm| stay_checks(&form.check_in, &form.check_out).1),
    ]
}

pub fn reservation_update_rules() -> Vec<FieldRule<ReservationUpdateForm>> {
    vec![
        FieldRule::new("checkIn", |form: &ReservationUpdateForm| {
            stay_checks(&form.check_in, &form.check_out).0
        }),
        FieldRule::new("checkOut", |form: &ReservationUpdateForm| {
            stay_checks(&form.check_in, &form.check_out).1
        }),
    ]
}

pub fn room_rules() -> Vec<FieldRule<RoomForm>> {
    vec![
        FieldRule::new("roomNumber", |form: &RoomForm| {
            FieldValidator::required(&form.room_number, "Room number")
        }),
        FieldRule::new("roomType", |form: &RoomForm| FieldValidator::required(&form.room_type, "Room type")),
        FieldRule::new("pricePerNight", |form: &RoomForm| {
            FieldValidator::positive_number(&form.price_per_night, "Price per night")
        }),
        FieldRule::new("capacity", |form: &RoomForm| {
            FieldValidator::positive_integer(&form.capacity, "Capacity")
        }),
    ]
}

pub fn user_rules() -> Vec<FieldRule<UserForm>> {
    vec![
        FieldRule::new("username", |form: &UserForm| FieldValidator::username(&form.username)),
        FieldRule::new("password", |form: &UserForm| FieldValidator::password(&form.password)),
        FieldRule::new("fullName", |form: &UserForm| FieldValidator::required(&form.full_name, "Full name")),
        FieldRule::new("email", |form: &UserForm| FieldValidator::email(&form.email)),
        FieldRule::new("phone", |form: &UserForm| FieldValidator::phone(&form.phone)),
        FieldRule::new("nic", |form: &UserForm| FieldValidator::nic(&form.nic)),
        FieldRule::new("role", |form: &UserForm| {
            let allowed = Role::ALL.map(Role::as_str);
            FieldValidator::one_of(&form.role, &allowed, "Role")
        }),
    ]
}

impl InputValidator for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_form(&login_rules(), self)
    }
}

impl InputValidator for RegisterForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_form(&register_rules(), self)
    }
}

impl InputValidator for BookingForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_form(&booking_rules(), self)
    }
}

impl InputValidator for WalkInForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_form(&walk_in_rules(), self)
    }
}

impl InputValidator for ReservationUpdateForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_form(&reservation_update_rules(), self)
    }
}

impl InputValidator for RoomForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_form(&room_rules(), self)
    }
}

impl InputValidator for UserForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_form(&user_rules(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn test_login_form_validation() {
        assert!(LoginForm { username: "reception".into(), password: "x".into() }.is_valid());

        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.first(), Some(("username", "Username is required")));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_register_form_validation() {
        assert!(valid_register_form().validate().is_ok());

        let mismatched = RegisterForm {
            confirm_password: "different".into(),
            ..valid_register_form()
        };
        assert_eq!(
            mismatched.validate().unwrap_err().get("confirmPassword"),
            Some("Passwords do not match")
        );

        let bad_contacts = RegisterForm {
            email: "nope".into(),
            nic: "12345".into(),
            ..valid_register_form()
        };
        let errors = bad_contacts.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some(("email", "Please enter a valid email address")));
    }

    #[test]
    fn test_booking_form_validation() {
        assert!(booking_form("2025-06-01", "2025-06-04").validate().is_ok());

        let inverted = booking_form("2025-01-02", "2025-01-01").validate().unwrap_err();
        assert_eq!(inverted.len(), 1);
        assert_eq!(
            inverted.get("checkOut"),
            Some("Check-out date must be after check-in date")
        );

        let empty = BookingForm::default().validate().unwrap_err();
        let fields: Vec<&str> = empty.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["roomId", "checkIn", "checkOut"]);

        let garbled = booking_form("someday", "2025-01-01").validate().unwrap_err();
        assert_eq!(garbled.get("checkIn"), Some("Check-in date must be a valid date"));
        assert_eq!(garbled.get("checkOut"), None);
    }

    #[test]
    fn test_walk_in_requires_contact_details() {
        assert!(valid_walk_in_form().validate().is_ok());

        let form = WalkInForm {
            guest_phone: "".into(),
            guest_nic: "90123V".into(),
            ..valid_walk_in_form()
        };
        let errors = form.validate().unwrap_err();

        assert_eq!(errors.first(), Some(("guestPhone", "Phone number is required")));
        assert!(errors.get("guestNic").is_some());
    }

    #[test]
    fn test_room_form_validation() {
        let form = RoomForm {
            room_number: "101".into(),
            room_type: "Deluxe".into(),
            price_per_night: "15000".into(),
            capacity: "2".into(),
            description: "".into(),
        };
        assert!(form.validate().is_ok());

        let bad_price = RoomForm { price_per_night: "-5".into(), ..form.clone() };
        assert_eq!(
            bad_price.validate().unwrap_err().get("pricePerNight"),
            Some("Price per night must be a positive number")
        );

        let bad_capacity = RoomForm { capacity: "abc".into(), ..form };
        assert_eq!(
            bad_capacity.validate().unwrap_err().get("capacity"),
            Some("Capacity must be a positive number")
        );
    }

    #[test]
    fn test_user_form_role() {
        let form = UserForm {
            username: "night_manager".into(),
            password: "secret12".into(),
            full_name: "Night Manager".into(),
            role: "staff".into(),
            ..UserForm::default()
        };
        assert!(form.validate().is_ok());

        let bad_role = UserForm { role: "owner".into(), ..form };
        assert_eq!(
            bad_role.validate().unwrap_err().get("role"),
            Some("Role must be one of: guest, staff, admin")
        );
    }

    #[test]
    fn test_reservation_update_same_day() {
        let form = ReservationUpdateForm {
            check_in: "2025-06-01".into(),
            check_out: "2025-06-01".into(),
        };

        assert!(form.validate().unwrap_err().get("checkOut").is_some());
    }
}
