//! Profile fetch and update.

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::{Address, User};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Editable profile fields. Login email and role are not part of the
/// profile surface.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub mobile_number: String,
    pub aadhar_number: String,
    pub parent_name: String,
    pub parent_mobile_number: String,
    pub blood_group: String,
    pub address: Address,
}

/// Thin service over the user repository for profile operations.
pub struct ProfileService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> ProfileService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Fetch a user's details. The password hash never leaves the
    /// entity's serializer anyway.
    pub async fn user_details(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    /// Apply a profile update.
    pub async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> DomainResult<()> {
        let mut user = self.user_details(user_id).await?;

        user.full_name = update.full_name;
        user.date_of_birth = update.date_of_birth;
        user.gender = update.gender;
        user.mobile_number = update.mobile_number;
        user.aadhar_number = update.aadhar_number;
        user.parent_name = update.parent_name;
        user.parent_mobile_number = update.parent_mobile_number;
        user.blood_group = update.blood_group;
        user.address = update.address;
        user.updated_at = chrono::Utc::now();

        self.user_repository.update(user).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;
    use crate::repositories::user::MockUserRepository;
    use chrono::Utc;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            full_name: "Vishnu Das".to_string(),
            email: "vishnu@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1998, 6, 14).unwrap(),
            gender: "Male".to_string(),
            mobile_number: "9876522222".to_string(),
            aadhar_number: "333456789012".to_string(),
            parent_name: "Das K".to_string(),
            parent_mobile_number: "9876500004".to_string(),
            blood_group: "O-".to_string(),
            address: Address {
                house_name: "Ambadi".to_string(),
                area: "Ulloor".to_string(),
                landmark: "Near junction".to_string(),
                city: "Thiruvananthapuram".to_string(),
                state: "Kerala".to_string(),
                country: "India".to_string(),
                pincode: "695011".to_string(),
            },
            role: UserRole::Guest,
            room_no: None,
            date_of_admission: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_update_profile_keeps_identity_fields() {
        let repo = Arc::new(MockUserRepository::new());
        let user = sample_user();
        let id = user.id;
        let email = user.email.clone();
        let hash = user.password_hash.clone();
        repo.insert(user).await;

        let service = ProfileService::new(repo.clone());
        service
            .update_profile(
                id,
                ProfileUpdate {
                    full_name: "Vishnu D".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(1998, 6, 14).unwrap(),
                    gender: "Male".to_string(),
                    mobile_number: "9876533333".to_string(),
                    aadhar_number: "333456789012".to_string(),
                    parent_name: "Das K".to_string(),
                    parent_mobile_number: "9876500004".to_string(),
                    blood_group: "O-".to_string(),
                    address: Address {
                        house_name: "Ambadi".to_string(),
                        area: "Ulloor".to_string(),
                        landmark: "Near junction".to_string(),
                        city: "Kochi".to_string(),
                        state: "Kerala".to_string(),
                        country: "India".to_string(),
                        pincode: "682001".to_string(),
                    },
                },
            )
            .await
            .unwrap();

        let updated = service.user_details(id).await.unwrap();
        assert_eq!(updated.full_name, "Vishnu D");
        assert_eq!(updated.mobile_number, "9876533333");
        assert_eq!(updated.address.city, "Kochi");
        // Login identity untouched.
        assert_eq!(updated.email, email);
        assert_eq!(updated.password_hash, hash);
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let repo = Arc::new(MockUserRepository::new());
        let service = ProfileService::new(repo);
        let err = service.user_details(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
    }
}
