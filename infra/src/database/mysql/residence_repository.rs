//! MySQL implementation of the ResidenceRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sm_core::domain::entities::residence::{Complaint, LeaveLetter, MenuDay, Review};
use sm_core::errors::DomainError;
use sm_core::repositories::ResidenceRepository;

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database query failed: {}", e),
    }
}

fn parse_uuid(s: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(s).map_err(|e| DomainError::Database {
        message: format!("Invalid UUID: {}", e),
    })
}

/// MySQL implementation of ResidenceRepository
pub struct MySqlResidenceRepository {
    pool: MySqlPool,
}

impl MySqlResidenceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &sqlx::mysql::MySqlRow) -> Result<Review, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let user_id: String = row.try_get("user_id").map_err(db_err)?;

        Ok(Review {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            rating: row.try_get::<i64, _>("rating").map_err(db_err)? as u8,
            title: row.try_get("title").map_err(db_err)?,
            body: row.try_get("body").map_err(db_err)?,
            posted_at: row
                .try_get::<DateTime<Utc>, _>("posted_at")
                .map_err(db_err)?,
        })
    }
}

#[async_trait]
impl ResidenceRepository for MySqlResidenceRepository {
    async fn menu(&self) -> Result<Vec<MenuDay>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, day, breakfast, lunch, snacks, dinner \
             FROM menu ORDER BY FIELD(day, 'Sunday', 'Monday', 'Tuesday', \
             'Wednesday', 'Thursday', 'Friday', 'Saturday')",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(db_err)?;
                Ok(MenuDay {
                    id: parse_uuid(&id)?,
                    day: row.try_get("day").map_err(db_err)?,
                    breakfast: row.try_get("breakfast").map_err(db_err)?,
                    lunch: row.try_get("lunch").map_err(db_err)?,
                    snacks: row.try_get("snacks").map_err(db_err)?,
                    dinner: row.try_get("dinner").map_err(db_err)?,
                })
            })
            .collect()
    }

    async fn find_review_by_user(&self, user_id: Uuid) -> Result<Option<Review>, DomainError> {
        let result = sqlx::query(
            "SELECT id, user_id, rating, title, body, posted_at \
             FROM reviews WHERE user_id = ? LIMIT 1",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_review(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_review(&self, review: Review) -> Result<Review, DomainError> {
        sqlx::query(
            "INSERT INTO reviews (id, user_id, rating, title, body, posted_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(review.id.to_string())
        .bind(review.user_id.to_string())
        .bind(review.rating as i64)
        .bind(&review.title)
        .bind(&review.body)
        .bind(review.posted_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(review)
    }

    async fn update_review(&self, review: Review) -> Result<Review, DomainError> {
        let result = sqlx::query(
            "UPDATE reviews SET rating = ?, title = ?, body = ?, posted_at = ? WHERE id = ?",
        )
        .bind(review.rating as i64)
        .bind(&review.title)
        .bind(&review.body)
        .bind(review.posted_at)
        .bind(review.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Review".to_string(),
            });
        }
        Ok(review)
    }

    async fn delete_review(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn leave_letters_for(&self, user_id: Uuid) -> Result<Vec<LeaveLetter>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, user_id, reason, departure_date, return_date, submitted_at \
             FROM leave_letters WHERE user_id = ? ORDER BY submitted_at DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(db_err)?;
                let uid: String = row.try_get("user_id").map_err(db_err)?;
                Ok(LeaveLetter {
                    id: parse_uuid(&id)?,
                    user_id: parse_uuid(&uid)?,
                    reason: row.try_get("reason").map_err(db_err)?,
                    departure_date: row
                        .try_get::<NaiveDate, _>("departure_date")
                        .map_err(db_err)?,
                    return_date: row.try_get::<NaiveDate, _>("return_date").map_err(db_err)?,
                    submitted_at: row
                        .try_get::<DateTime<Utc>, _>("submitted_at")
                        .map_err(db_err)?,
                })
            })
            .collect()
    }

    async fn create_leave_letter(&self, letter: LeaveLetter) -> Result<LeaveLetter, DomainError> {
        sqlx::query(
            "INSERT INTO leave_letters (id, user_id, reason, departure_date, return_date, submitted_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(letter.id.to_string())
        .bind(letter.user_id.to_string())
        .bind(&letter.reason)
        .bind(letter.departure_date)
        .bind(letter.return_date)
        .bind(letter.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(letter)
    }

    async fn complaints_for(&self, user_id: Uuid) -> Result<Vec<Complaint>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, user_id, category, description, submitted_at \
             FROM complaints WHERE user_id = ? ORDER BY submitted_at DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(db_err)?;
                let uid: String = row.try_get("user_id").map_err(db_err)?;
                Ok(Complaint {
                    id: parse_uuid(&id)?,
                    user_id: parse_uuid(&uid)?,
                    category: row.try_get("category").map_err(db_err)?,
                    description: row.try_get("description").map_err(db_err)?,
                    submitted_at: row
                        .try_get::<DateTime<Utc>, _>("submitted_at")
                        .map_err(db_err)?,
                })
            })
            .collect()
    }

    async fn create_complaint(&self, complaint: Complaint) -> Result<Complaint, DomainError> {
        sqlx::query(
            "INSERT INTO complaints (id, user_id, category, description, submitted_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(complaint.id.to_string())
        .bind(complaint.user_id.to_string())
        .bind(&complaint.category)
        .bind(&complaint.description)
        .bind(complaint.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(complaint)
    }
}
