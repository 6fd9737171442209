use crate::errors::AuthError;
use crate::{Desk, DeskOutcome};
use chrono::Utc;
use data_access_objects::{DaoError, Transport};
use models::forms::{optional_field, LoginForm, RegisterForm};
use models::users::{AuthResponse, Credentials, NewUser, Role, User};
use repositories::{RepositoryError, UserRepository};
use services::authentication::{AuthToken, Session};
use services::validation::InputValidator;

impl<T: Transport> Desk<T> {
    pub async fn login(&self, session: &mut Session, form: &LoginForm) -> DeskOutcome<User> {
        if let Err(errors) = form.validate() {
            return errors.into();
        }

        let credentials = Credentials {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
        };
        match UserRepository::login(self.dao(), &credentials).await {
            Ok(response) => start_session(session, response),
            Err(RepositoryError::Api(DaoError::Unauthorized(_))) => {
                tracing::warn!("login failed: bad credentials");
                DeskOutcome::AuthError(AuthError::new("Invalid username or password"))
            }
            Err(e) => e.into(),
        }
    }

    /// Self-registration always creates a guest account and signs it in.
    pub async fn register(&self, session: &mut Session, form: &RegisterForm) -> DeskOutcome<User> {
        if let Err(errors) = form.validate() {
            return errors.into();
        }

        let new_user = NewUser {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
            full_name: form.full_name.trim().to_string(),
            email: optional_field(&form.email),
            phone: optional_field(&form.phone),
            nic: optional_field(&form.nic),
            role: Role::Guest,
        };
        match UserRepository::register(self.dao(), &new_user).await {
            Ok(response) => start_session(session, response),
            Err(e) => e.into(),
        }
    }

    pub fn logout(&self, session: &mut Session) {
        session.sign_out();
    }
}

fn start_session(session: &mut Session, response: AuthResponse) -> DeskOutcome<User> {
    let token = AuthToken::new(response.token);
    if token.is_expired(Utc::now()) {
        tracing::error!(user_id = %response.user.id, "server issued an already expired token");
        return DeskOutcome::AuthError(AuthError::new("Sign-in failed. Please try again"));
    }

    tracing::info!(user_id = %response.user.id, "signin success");
    session.sign_in(token, response.user.clone());
    DeskOutcome::Success(response.user)
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use crate::{DeskOutcome, ValidationErrorType};
    use chrono::{Duration, Utc};
    use data_access_objects::{ApiResponse, HttpMethod};
    use models::forms::{LoginForm, RegisterForm};
    use models::users::Role;
    use services::authentication::Session;
    use uuid::Uuid;

    fn login_form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_login_starts_session() {
        let user_id = Uuid::new_v4();
        let mut transport = MockApi::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == HttpMethod::Post
                    && request.path == "auth/login"
                    && request.body.as_ref().map(|b| b["username"] == "reception").unwrap_or(false)
            })
            .times(1)
            .returning(move |_| {
                Ok(ApiResponse::ok(serde_json::json!({
                    "token": "fresh-token",
                    "user": user_json(user_id, "reception", "staff")
                })))
            });
        let desk = desk_with(transport);
        let mut session = Session::anonymous();

        let outcome = desk.login(&mut session, &login_form(" reception ", "secret1")).await;

        assert_eq!(outcome.success().map(|user| user.id), Some(user_id));
        assert!(session.has_role(Role::Staff));
        assert_eq!(session.bearer(Utc::now()), Ok("fresh-token"));
    }

    #[tokio::test]
    async fn test_login_validation_sends_nothing() {
        let desk = desk_with(silent_transport());
        let mut session = Session::anonymous();

        let outcome = desk.login(&mut session, &login_form("", "")).await;

        assert_eq!(
            outcome,
            DeskOutcome::ValidationError(ValidationErrorType::new("username", "Username is required"))
        );
    }

    #[tokio::test]
    async fn test_login_bad_credentials() {
        let mut transport = MockApi::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(ApiResponse::new(401, serde_json::json!({ "message": "Unauthorized" }))));
        let desk = desk_with(transport);
        let mut session = Session::anonymous();

        let outcome = desk.login(&mut session, &login_form("reception", "wrong")).await;

        assert_eq!(outcome.error_message(), Some("Invalid username or password"));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_rejects_expired_token() {
        let expired = jwt_expiring_at(Utc::now() - Duration::hours(1));
        let token = expired.as_str().to_string();
        let mut transport = MockApi::new();
        transport.expect_send().times(1).returning(move |_| {
            Ok(ApiResponse::ok(serde_json::json!({
                "token": token,
                "user": user_json(Uuid::new_v4(), "reception", "staff")
            })))
        });
        let desk = desk_with(transport);
        let mut session = Session::anonymous();

        let outcome = desk.login(&mut session, &login_form("reception", "secret1")).await;

        assert!(matches!(outcome, DeskOutcome::AuthError(_)));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_creates_guest() {
        let mut transport = MockApi::new();
        transport
            .expect_send()
            .withf(|request| {
                request.path == "auth/register"
                    && request.body.as_ref().map(|b| b["role"] == "guest" && b.get("email").is_none()).unwrap_or(false)
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::new(201, serde_json::json!({
                    "token": "guest-token",
                    "user": user_json(Uuid::new_v4(), "new_guest", "guest")
                })))
            });
        let desk = desk_with(transport);
        let mut session = Session::anonymous();
        let form = RegisterForm {
            username: "new_guest".into(),
            password: "secret12".into(),
            confirm_password: "secret12".into(),
            full_name: "New Guest".into(),
            ..RegisterForm::default()
        };

        let outcome = desk.register(&mut session, &form).await;

        assert!(outcome.is_success());
        assert_eq!(session.role(), Some(Role::Guest));
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let desk = desk_with(silent_transport());
        let mut session = Session::anonymous();
        let form = RegisterForm {
            username: "new_guest".into(),
            password: "secret12".into(),
            confirm_password: "secret13".into(),
            full_name: "New Guest".into(),
            ..RegisterForm::default()
        };

        let outcome = desk.register(&mut session, &form).await;

        assert_eq!(
            outcome,
            DeskOutcome::ValidationError(ValidationErrorType::new("confirmPassword", "Passwords do not match"))
        );
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let desk = desk_with(silent_transport());
        let mut session = signed_in(Role::Guest);

        desk.logout(&mut session);

        assert!(!session.is_authenticated());
    }
}
