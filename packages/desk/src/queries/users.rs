use crate::utilities::requires_auth::require_role;
use crate::{Desk, DeskOutcome};
use data_access_objects::Transport;
use models::users::{Role, User};
use repositories::UserRepository;
use services::authentication::Session;

impl<T: Transport> Desk<T> {
    pub async fn list_users(&self, session: &mut Session) -> DeskOutcome<Vec<User>> {
        if let Err(e) = require_role(session, Role::Admin) {
            return e.into();
        }

        let result = UserRepository::list(self.dao(), session).await;
        match result {
            Ok(users) => DeskOutcome::Success(users),
            Err(e) => DeskOutcome::from_repository(session, e),
        }
    }
}
