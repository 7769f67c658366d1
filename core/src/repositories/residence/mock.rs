//! Mock implementation of ResidenceRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::residence::{Complaint, LeaveLetter, MenuDay, Review};
use crate::errors::DomainError;

use super::trait_::ResidenceRepository;

#[derive(Default)]
struct Records {
    menu: Vec<MenuDay>,
    reviews: HashMap<Uuid, Review>,
    leave_letters: Vec<LeaveLetter>,
    complaints: Vec<Complaint>,
}

/// In-memory residence records for tests
pub struct MockResidenceRepository {
    inner: Arc<RwLock<Records>>,
}

impl MockResidenceRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Records::default())),
        }
    }

    pub async fn insert_menu_day(&self, day: MenuDay) {
        self.inner.write().await.menu.push(day);
    }
}

impl Default for MockResidenceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResidenceRepository for MockResidenceRepository {
    async fn menu(&self) -> Result<Vec<MenuDay>, DomainError> {
        Ok(self.inner.read().await.menu.clone())
    }

    async fn find_review_by_user(&self, user_id: Uuid) -> Result<Option<Review>, DomainError> {
        let records = self.inner.read().await;
        Ok(records
            .reviews
            .values()
            .find(|r| r.user_id == user_id)
            .cloned())
    }

    async fn create_review(&self, review: Review) -> Result<Review, DomainError> {
        let mut records = self.inner.write().await;
        records.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn update_review(&self, review: Review) -> Result<Review, DomainError> {
        let mut records = self.inner.write().await;
        if !records.reviews.contains_key(&review.id) {
            return Err(DomainError::NotFound {
                resource: "Review".to_string(),
            });
        }
        records.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete_review(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut records = self.inner.write().await;
        Ok(records.reviews.remove(&id).is_some())
    }

    async fn leave_letters_for(&self, user_id: Uuid) -> Result<Vec<LeaveLetter>, DomainError> {
        let records = self.inner.read().await;
        Ok(records
            .leave_letters
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_leave_letter(&self, letter: LeaveLetter) -> Result<LeaveLetter, DomainError> {
        let mut records = self.inner.write().await;
        records.leave_letters.push(letter.clone());
        Ok(letter)
    }

    async fn complaints_for(&self, user_id: Uuid) -> Result<Vec<Complaint>, DomainError> {
        let records = self.inner.read().await;
        Ok(records
            .complaints
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_complaint(&self, complaint: Complaint) -> Result<Complaint, DomainError> {
        let mut records = self.inner.write().await;
        records.complaints.push(complaint.clone());
        Ok(complaint)
    }
}
