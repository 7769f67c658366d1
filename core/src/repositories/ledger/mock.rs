//! Mock implementation of LedgerRepository for testing

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::rent::{Payment, RentDue, RentDueStatus};
use crate::errors::DomainError;

use super::trait_::LedgerRepository;

#[derive(Default)]
struct Ledger {
    dues: HashMap<Uuid, RentDue>,
    payments: Vec<Payment>,
}

/// In-memory rent ledger for tests
pub struct MockLedgerRepository {
    inner: Arc<RwLock<Ledger>>,
}

impl MockLedgerRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Ledger::default())),
        }
    }

    pub async fn insert_due(&self, due: RentDue) {
        self.inner.write().await.dues.insert(due.id, due);
    }

    /// Snapshot a due for assertions.
    pub async fn due(&self, id: Uuid) -> Option<RentDue> {
        self.inner.read().await.dues.get(&id).cloned()
    }

    /// Total payments recorded, for assertions.
    pub async fn payment_count(&self) -> usize {
        self.inner.read().await.payments.len()
    }
}

impl Default for MockLedgerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerRepository for MockLedgerRepository {
    async fn find_due(
        &self,
        user_id: Uuid,
        rent_date: NaiveDate,
        status: RentDueStatus,
    ) -> Result<Option<RentDue>, DomainError> {
        let ledger = self.inner.read().await;
        Ok(ledger
            .dues
            .values()
            .find(|d| d.user_id == user_id && d.rent_date == rent_date && d.status == status)
            .cloned())
    }

    async fn create_due(&self, due: RentDue) -> Result<RentDue, DomainError> {
        let mut ledger = self.inner.write().await;

        // Dedup on (user, month, Unpaid) like the unique index in MySQL.
        if let Some(existing) = ledger
            .dues
            .values()
            .find(|d| {
                d.user_id == due.user_id
                    && d.rent_date == due.rent_date
                    && d.status == RentDueStatus::Unpaid
            })
            .cloned()
        {
            return Ok(existing);
        }

        ledger.dues.insert(due.id, due.clone());
        Ok(due)
    }

    async fn mark_due_paid(&self, id: Uuid) -> Result<RentDue, DomainError> {
        let mut ledger = self.inner.write().await;
        let due = ledger.dues.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "RentDue".to_string(),
        })?;
        due.mark_paid();
        Ok(due.clone())
    }

    async fn delete_due(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut ledger = self.inner.write().await;
        Ok(ledger.dues.remove(&id).is_some())
    }

    async fn record_payment(&self, payment: Payment) -> Result<Payment, DomainError> {
        let mut ledger = self.inner.write().await;
        ledger.payments.push(payment.clone());
        Ok(payment)
    }

    async fn payments_for_user(&self, user_id: Uuid) -> Result<Vec<Payment>, DomainError> {
        let ledger = self.inner.read().await;
        let mut payments: Vec<Payment> = ledger
            .payments
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.date_of_payment.cmp(&a.date_of_payment));
        Ok(payments)
    }
}
