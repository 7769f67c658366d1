//! Residence-life workflows.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::residence::{Complaint, LeaveLetter, MenuDay, Review};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ResidenceRepository;

/// A review submission.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: u8,
    pub title: String,
    pub body: String,
}

/// A leave letter submission.
#[derive(Debug, Clone)]
pub struct NewLeaveLetter {
    pub reason: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// A complaint submission.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub category: String,
    pub description: String,
}

/// Service over the residence-life records.
pub struct ResidenceService<S: ResidenceRepository> {
    residence_repository: Arc<S>,
}

impl<S: ResidenceRepository> ResidenceService<S> {
    pub fn new(residence_repository: Arc<S>) -> Self {
        Self {
            residence_repository,
        }
    }

    /// The weekly mess menu.
    pub async fn hostel_menu(&self) -> DomainResult<Vec<MenuDay>> {
        self.residence_repository.menu().await
    }

    /// Post a review. Each user gets one.
    pub async fn post_review(&self, user_id: Uuid, review: NewReview) -> DomainResult<Review> {
        if self
            .residence_repository
            .find_review_by_user(user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::BusinessRule {
                message: "You have already posted a review".to_string(),
            });
        }

        self.residence_repository
            .create_review(Review {
                id: Uuid::new_v4(),
                user_id,
                rating: review.rating,
                title: review.title,
                body: review.body,
                posted_at: Utc::now(),
            })
            .await
    }

    /// A user's review, if any.
    pub async fn review_for_user(&self, user_id: Uuid) -> DomainResult<Option<Review>> {
        self.residence_repository.find_review_by_user(user_id).await
    }

    /// Replace the content of an existing review.
    pub async fn update_review(
        &self,
        review_id: Uuid,
        user_id: Uuid,
        review: NewReview,
    ) -> DomainResult<Review> {
        self.residence_repository
            .update_review(Review {
                id: review_id,
                user_id,
                rating: review.rating,
                title: review.title,
                body: review.body,
                posted_at: Utc::now(),
            })
            .await
    }

    /// Delete a review.
    pub async fn delete_review(&self, review_id: Uuid) -> DomainResult<bool> {
        self.residence_repository.delete_review(review_id).await
    }

    /// Leave letters filed by a user.
    pub async fn leave_letters(&self, user_id: Uuid) -> DomainResult<Vec<LeaveLetter>> {
        self.residence_repository.leave_letters_for(user_id).await
    }

    /// File a leave letter.
    pub async fn submit_leave_letter(
        &self,
        user_id: Uuid,
        letter: NewLeaveLetter,
    ) -> DomainResult<LeaveLetter> {
        self.residence_repository
            .create_leave_letter(LeaveLetter {
                id: Uuid::new_v4(),
                user_id,
                reason: letter.reason,
                departure_date: letter.departure_date,
                return_date: letter.return_date,
                submitted_at: Utc::now(),
            })
            .await
    }

    /// Complaints filed by a user.
    pub async fn complaints(&self, user_id: Uuid) -> DomainResult<Vec<Complaint>> {
        self.residence_repository.complaints_for(user_id).await
    }

    /// File a complaint.
    pub async fn submit_complaint(
        &self,
        user_id: Uuid,
        complaint: NewComplaint,
    ) -> DomainResult<Complaint> {
        self.residence_repository
            .create_complaint(Complaint {
                id: Uuid::new_v4(),
                user_id,
                category: complaint.category,
                description: complaint.description,
                submitted_at: Utc::now(),
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::residence::MockResidenceRepository;

    fn service() -> (ResidenceService<MockResidenceRepository>, Uuid) {
        (
            ResidenceService::new(Arc::new(MockResidenceRepository::new())),
            Uuid::new_v4(),
        )
    }

    #[tokio::test]
    async fn test_one_review_per_user() {
        let (svc, user_id) = service();

        svc.post_review(
            user_id,
            NewReview {
                rating: 4,
                title: "Good stay".to_string(),
                body: "Clean rooms, decent food".to_string(),
            },
        )
        .await
        .unwrap();

        let err = svc
            .post_review(
                user_id,
                NewReview {
                    rating: 5,
                    title: "Again".to_string(),
                    body: "Second attempt".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BusinessRule { .. }));
    }

    #[tokio::test]
    async fn test_review_update_and_delete() {
        let (svc, user_id) = service();

        let review = svc
            .post_review(
                user_id,
                NewReview {
                    rating: 3,
                    title: "Okay".to_string(),
                    body: "Average".to_string(),
                },
            )
            .await
            .unwrap();

        let updated = svc
            .update_review(
                review.id,
                user_id,
                NewReview {
                    rating: 4,
                    title: "Better now".to_string(),
                    body: "Food improved".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.rating, 4);

        assert!(svc.delete_review(review.id).await.unwrap());
        assert!(svc.review_for_user(user_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_letters_and_complaints_scoped_to_user() {
        let (svc, user_id) = service();
        let other = Uuid::new_v4();

        svc.submit_leave_letter(
            user_id,
            NewLeaveLetter {
                reason: "Sister's wedding".to_string(),
                departure_date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
                return_date: NaiveDate::from_ymd_opt(2026, 4, 14).unwrap(),
            },
        )
        .await
        .unwrap();

        svc.submit_complaint(
            user_id,
            NewComplaint {
                category: "Maintenance".to_string(),
                description: "Leaking tap in A101".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(svc.leave_letters(user_id).await.unwrap().len(), 1);
        assert_eq!(svc.complaints(user_id).await.unwrap().len(), 1);
        assert!(svc.leave_letters(other).await.unwrap().is_empty());
        assert!(svc.complaints(other).await.unwrap().is_empty());
    }
}
