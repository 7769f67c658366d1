//! Residence-life repository trait: mess menu, reviews, leave letters,
//! and complaints.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::residence::{Complaint, LeaveLetter, MenuDay, Review};
use crate::errors::DomainError;

/// Repository contract for residence-life records.
#[async_trait]
pub trait ResidenceRepository: Send + Sync {
    /// The full weekly mess menu.
    async fn menu(&self) -> Result<Vec<MenuDay>, DomainError>;

    /// A user's hostel review, if they have posted one.
    async fn find_review_by_user(&self, user_id: Uuid) -> Result<Option<Review>, DomainError>;

    async fn create_review(&self, review: Review) -> Result<Review, DomainError>;

    async fn update_review(&self, review: Review) -> Result<Review, DomainError>;

    async fn delete_review(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Leave letters filed by a user.
    async fn leave_letters_for(&self, user_id: Uuid) -> Result<Vec<LeaveLetter>, DomainError>;

    async fn create_leave_letter(&self, letter: LeaveLetter) -> Result<LeaveLetter, DomainError>;

    /// Complaints filed by a user.
    async fn complaints_for(&self, user_id: Uuid) -> Result<Vec<Complaint>, DomainError>;

    async fn create_complaint(&self, complaint: Complaint) -> Result<Complaint, DomainError>;
}
