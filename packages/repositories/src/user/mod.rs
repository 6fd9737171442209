use data_access_objects::{RestDao, Transport};
use models::users::{AuthResponse, Credentials, NewUser, User};
use services::authentication::Session;
use uuid::Uuid;

use crate::error::{bearer, RepositoryError};

/// Authentication and the admin user registry.
pub struct UserRepository;

impl UserRepository {
    pub async fn login<T: Transport>(
        dao: &RestDao<T>,
        credentials: &Credentials,
    ) -> Result<AuthResponse, RepositoryError> {
        Ok(dao.post("auth/login", credentials, None).await?)
    }

    pub async fn register<T: Transport>(
        dao: &RestDao<T>,
        user: &NewUser,
    ) -> Result<AuthResponse, RepositoryError> {
        Ok(dao.post("auth/register", user, None).await?)
    }

    pub async fn list<T: Transport>(dao: &RestDao<T>, session: &Session) -> Result<Vec<User>, RepositoryError> {
        Ok(dao.get("users", &[], Some(bearer(session)?)).await?)
    }

    pub async fn create<T: Transport>(
        dao: &RestDao<T>,
        session: &Session,
        user: &NewUser,
    ) -> Result<User, RepositoryError> {
        let created: User = dao.post("users", user, Some(bearer(session)?)).await?;
        tracing::info!(user_id = %created.id, role = %created.role, "user created");
        Ok(created)
    }

    pub async fn delete<T: Transport>(dao: &RestDao<T>, session: &Session, id: Uuid) -> Result<(), RepositoryError> {
        dao.delete(&format!("users/{}", id), Some(bearer(session)?)).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}
