//! Ledger repository trait covering rent dues and payments.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::entities::rent::{Payment, RentDue, RentDueStatus};
use crate::errors::DomainError;

/// Repository contract for rent obligations and the payment ledger.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Find the rent due for a user on a month anchor with the given
    /// status. At most one such record exists per (user, month, status).
    async fn find_due(
        &self,
        user_id: Uuid,
        rent_date: NaiveDate,
        status: RentDueStatus,
    ) -> Result<Option<RentDue>, DomainError>;

    /// Persist a new rent due.
    ///
    /// Implementations must deduplicate on (user, rent_date, Unpaid):
    /// when a concurrent status check already created the month's
    /// record, the existing record is returned instead of a duplicate.
    async fn create_due(&self, due: RentDue) -> Result<RentDue, DomainError>;

    /// Flip a rent due to Paid.
    async fn mark_due_paid(&self, id: Uuid) -> Result<RentDue, DomainError>;

    /// Delete a rent due (eviction path).
    ///
    /// # Returns
    /// * `Ok(true)` - deleted
    /// * `Ok(false)` - no such record
    async fn delete_due(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Append a payment to the ledger. Payments are never updated.
    async fn record_payment(&self, payment: Payment) -> Result<Payment, DomainError>;

    /// All payments made by a user, newest first.
    async fn payments_for_user(&self, user_id: Uuid) -> Result<Vec<Payment>, DomainError>;
}
