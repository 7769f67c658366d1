//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for [`User`] persistence.
///
/// Implementations handle the actual database operations while keeping
/// the domain layer free of storage concerns.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their login email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a user already exists with the given email or
    /// mobile number. Admission rejects duplicates on either field.
    async fn exists_by_email_or_mobile(
        &self,
        email: &str,
        mobile_number: &str,
    ) -> Result<bool, DomainError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// * `Ok(User)` - the created user
    /// * `Err(DomainError)` - creation failed (e.g. duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist the full state of an existing user.
    ///
    /// Used for profile updates, password changes, and the
    /// promote/demote transitions of the booking and rent flows.
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
