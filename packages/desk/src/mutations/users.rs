use crate::errors::{AuthError, ValidationErrorType};
use crate::utilities::requires_auth::require_role;
use crate::{Desk, DeskOutcome};
use data_access_objects::Transport;
use models::forms::{optional_field, UserForm};
use models::users::{NewUser, Role, User};
use repositories::UserRepository;
use services::authentication::Session;
use services::validation::InputValidator;
use uuid::Uuid;

impl<T: Transport> Desk<T> {
    pub async fn create_user(&self, session: &mut Session, form: &UserForm) -> DeskOutcome<User> {
        if let Err(errors) = form.validate() {
            return errors.into();
        }
        if let Err(e) = require_role(session, Role::Admin) {
            return e.into();
        }

        let role = match form.role.parse::<Role>() {
            Ok(role) => role,
            Err(e) => return ValidationErrorType::new("role", e.to_string()).into(),
        };
        let new_user = NewUser {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
            full_name: form.full_name.trim().to_string(),
            email: optional_field(&form.email),
            phone: optional_field(&form.phone),
            nic: optional_field(&form.nic),
            role,
        };
        let result = UserRepository::create(self.dao(), session, &new_user).await;
        match result {
            Ok(user) => DeskOutcome::Success(user),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }

    pub async fn delete_user(&self, session: &mut Session, id: Uuid) -> DeskOutcome<()> {
        let admin = match require_role(session, Role::Admin) {
            Ok(admin) => admin,
            Err(e) => return e.into(),
        };
        if admin.id == id {
            tracing::warn!(user_id = %id, "admin tried to delete own account");
            return AuthError::new("You cannot delete your own account").into();
        }

        let result = UserRepository::delete(self.dao(), session, id).await;
        match result {
            Ok(()) => DeskOutcome::Success(()),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }
}
