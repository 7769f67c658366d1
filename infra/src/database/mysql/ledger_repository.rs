//! MySQL implementation of the LedgerRepository trait.
//!
//! `rent_dues` carries a unique key over (user_id, rent_date, status),
//! so two concurrent status checks cannot both insert the month's
//! unpaid due; the loser of the race reads the winner's row back.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sm_core::domain::entities::rent::{Payment, RentDue, RentDueStatus};
use sm_core::errors::DomainError;
use sm_core::repositories::LedgerRepository;

const DUE_COLUMNS: &str = r#"
    id, user_id, rent_month, rent_date, rent_amount, fine,
    last_date_without_fine, last_date_with_fine, status
"#;

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

/// MySQL implementation of LedgerRepository
pub struct MySqlLedgerRepository {
    pool: MySqlPool,
}

impl MySqlLedgerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_due(row: &sqlx::mysql::MySqlRow) -> Result<RentDue, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let user_id: String = row.try_get("user_id").map_err(db_err)?;
        let status: String = row.try_get("status").map_err(db_err)?;

        Ok(RentDue {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            rent_month: row.try_get("rent_month").map_err(db_err)?,
            rent_date: row.try_get::<NaiveDate, _>("rent_date").map_err(db_err)?,
            rent_amount: row.try_get::<i64, _>("rent_amount").map_err(db_err)? as u32,
            fine: row.try_get::<i64, _>("fine").map_err(db_err)? as u32,
            last_date_without_fine: row
                .try_get::<NaiveDate, _>("last_date_without_fine")
                .map_err(db_err)?,
            last_date_with_fine: row
                .try_get::<NaiveDate, _>("last_date_with_fine")
                .map_err(db_err)?,
            status: if status == "Paid" {
                RentDueStatus::Paid
            } else {
                RentDueStatus::Unpaid
            },
        })
    }

    fn row_to_payment(row: &sqlx::mysql::MySqlRow) -> Result<Payment, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let user_id: String = row.try_get("user_id").map_err(db_err)?;

        Ok(Payment {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            rent_amount: row.try_get::<i64, _>("rent_amount").map_err(db_err)? as u32,
            date_of_payment: row
                .try_get::<DateTime<Utc>, _>("date_of_payment")
                .map_err(db_err)?,
            month_of_payment: row.try_get("month_of_payment").map_err(db_err)?,
        })
    }

    fn status_str(status: RentDueStatus) -> &'static str {
        match status {
            RentDueStatus::Unpaid => "Unpaid",
            RentDueStatus::Paid => "Paid",
        }
    }
}

#[async_trait]
impl LedgerRepository for MySqlLedgerRepository {
    async fn find_due(
        &self,
        user_id: Uuid,
        rent_date: NaiveDate,
        status: RentDueStatus,
    ) -> Result<Option<RentDue>, DomainError> {
        let query = format!(
            "SELECT {} FROM rent_dues \
             WHERE user_id = ? AND rent_date = ? AND status = ? LIMIT 1",
            DUE_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(rent_date)
            .bind(Self::status_str(status))
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_due(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_due(&self, due: RentDue) -> Result<RentDue, DomainError> {
        let query = r#"
            INSERT INTO rent_dues (
                id, user_id, rent_month, rent_date, rent_amount, fine,
                last_date_without_fine, last_date_with_fine, status
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(due.id.to_string())
            .bind(due.user_id.to_string())
            .bind(&due.rent_month)
            .bind(due.rent_date)
            .bind(due.rent_amount as i64)
            .bind(due.fine as i64)
            .bind(due.last_date_without_fine)
            .bind(due.last_date_with_fine)
            .bind(Self::status_str(due.status))
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(due),
            Err(e) => {
                let unique_violation = e
                    .as_database_error()
                    .map(|d| d.is_unique_violation())
                    .unwrap_or(false);
                if unique_violation {
                    // Lost the race: hand back the row that won.
                    self.find_due(due.user_id, due.rent_date, due.status)
                        .await?
                        .ok_or_else(|| DomainError::Database {
                            message: "Rent due vanished after duplicate insert".to_string(),
                        })
                } else {
                    Err(db_err(e))
                }
            }
        }
    }

    async fn mark_due_paid(&self, id: Uuid) -> Result<RentDue, DomainError> {
        let result = sqlx::query("UPDATE rent_dues SET status = 'Paid' WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "RentDue".to_string(),
            });
        }

        let query = format!("SELECT {} FROM rent_dues WHERE id = ? LIMIT 1", DUE_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;
        Self::row_to_due(&row)
    }

    async fn delete_due(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM rent_dues WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn record_payment(&self, payment: Payment) -> Result<Payment, DomainError> {
        let query = r#"
            INSERT INTO payments (
                id, user_id, rent_amount, date_of_payment, month_of_payment
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(payment.id.to_string())
            .bind(payment.user_id.to_string())
            .bind(payment.rent_amount as i64)
            .bind(payment.date_of_payment)
            .bind(&payment.month_of_payment)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(payment)
    }

    async fn payments_for_user(&self, user_id: Uuid) -> Result<Vec<Payment>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, user_id, rent_amount, date_of_payment, month_of_payment \
             FROM payments WHERE user_id = ? ORDER BY date_of_payment DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::row_to_payment).collect()
    }
}
