//! Main rent service implementation

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use sm_shared::config::RentPolicyConfig;

use crate::domain::entities::rent::{Payment, RentDue, RentDueStatus, RentStatus};
use crate::domain::entities::room::RoomType;
use crate::domain::entities::user::User;
use crate::domain::rent_schedule;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{LedgerRepository, RoomRepository, UserRepository};

use super::types::RentQuote;

/// Rent collection service.
///
/// Drives the per-month status machine `NoDueYet -> Unpaid -> {Paid |
/// Late}`. Handlers pass in "today" so every rule stays a function of
/// explicit dates.
pub struct RentService<U, R, L>
where
    U: UserRepository,
    R: RoomRepository,
    L: LedgerRepository,
{
    user_repository: Arc<U>,
    room_repository: Arc<R>,
    ledger: Arc<L>,
    policy: RentPolicyConfig,
}

impl<U, R, L> RentService<U, R, L>
where
    U: UserRepository,
    R: RoomRepository,
    L: LedgerRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        room_repository: Arc<R>,
        ledger: Arc<L>,
        policy: RentPolicyConfig,
    ) -> Self {
        Self {
            user_repository,
            room_repository,
            ledger,
            policy,
        }
    }

    /// The current month's unpaid rent due, if one exists.
    pub async fn current_due(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> DomainResult<Option<RentDue>> {
        let anchor = rent_schedule::month_start(today);
        self.ledger
            .find_due(user_id, anchor, RentDueStatus::Unpaid)
            .await
    }

    /// All payments a user has made, newest first.
    pub async fn payment_history(&self, user_id: Uuid) -> DomainResult<Vec<Payment>> {
        self.ledger.payments_for_user(user_id).await
    }

    /// Evaluate the rent status for the current month, applying the
    /// transition rules:
    ///
    /// 1. An unpaid due past its final deadline evicts the resident:
    ///    the room is released, the user demoted to guest, and the due
    ///    deleted. Result: `Late`.
    /// 2. An unpaid due still inside its window: `Unpaid`, untouched.
    /// 3. No due: the admission month and an already-paid month are
    ///    `Paid`; otherwise a fresh unpaid due is created with the fine
    ///    tier owed as of today, and the result is `Unpaid`.
    pub async fn check_payment_status(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> DomainResult<RentStatus> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let room_no = user.room_no.clone().ok_or(DomainError::BusinessRule {
            message: "User has no room assigned".to_string(),
        })?;

        let anchor = rent_schedule::month_start(today);

        if let Some(due) = self
            .ledger
            .find_due(user_id, anchor, RentDueStatus::Unpaid)
            .await?
        {
            if rent_schedule::is_evictable(today, due.last_date_with_fine) {
                self.evict(user, &room_no, &due).await?;
                return Ok(RentStatus::Late);
            }
            return Ok(RentStatus::Unpaid);
        }

        // Admission month is rent-free: the booking payment covered it.
        if let Some(admitted) = user.date_of_admission {
            if rent_schedule::same_month(admitted.date_naive(), today) {
                return Ok(RentStatus::Paid);
            }
        }

        if self
            .ledger
            .find_due(user_id, anchor, RentDueStatus::Paid)
            .await?
            .is_some()
        {
            return Ok(RentStatus::Paid);
        }

        let room = self
            .room_repository
            .find_room(&room_no)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Room {}", room_no),
            })?;
        let room_type = self
            .room_repository
            .find_room_type(room.room_type_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "RoomType".to_string(),
            })?;

        let (last_without_fine, last_with_fine) = rent_schedule::deadlines(&self.policy, anchor);
        let fine = rent_schedule::fine_on(&self.policy, today, last_without_fine, last_with_fine);

        let due = RentDue {
            id: Uuid::new_v4(),
            user_id,
            rent_month: rent_schedule::month_name(anchor),
            rent_date: anchor,
            rent_amount: room_type.rent,
            fine,
            last_date_without_fine: last_without_fine,
            last_date_with_fine: last_with_fine,
            status: RentDueStatus::Unpaid,
        };
        self.ledger.create_due(due).await?;

        tracing::info!(
            user_id = %user_id,
            month = %rent_schedule::month_name(anchor),
            fine = fine,
            event = "rent_due_created",
            "Created rent due for the month"
        );
        Ok(RentStatus::Unpaid)
    }

    /// Eviction path: release the room, demote the user, drop the due.
    async fn evict(&self, mut user: User, room_no: &str, due: &RentDue) -> DomainResult<()> {
        self.room_repository.release_room(room_no).await?;
        user.demote_to_guest();
        self.user_repository.update(user).await?;
        self.ledger.delete_due(due.id).await?;

        tracing::warn!(
            user_id = %due.user_id,
            room_no = room_no,
            month = %due.rent_month,
            event = "resident_evicted",
            "Rent unpaid past the fine deadline; resident demoted to guest"
        );
        Ok(())
    }

    /// First-month quote for a room type as of today.
    pub async fn quote(&self, room_type_id: Uuid, today: NaiveDate) -> DomainResult<RentQuote> {
        let room_type = self
            .room_repository
            .find_room_type(room_type_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "RoomType".to_string(),
            })?;

        let dynamic_rent = rent_schedule::prorated_rent(room_type.rent, today);
        let total_rent = dynamic_rent + room_type.admission_fees;
        Ok(RentQuote {
            room_type,
            dynamic_rent,
            total_rent,
        })
    }

    /// The room type a resident currently occupies.
    pub async fn resident_room_type(&self, user_id: Uuid) -> DomainResult<RoomType> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let room_no = user.room_no.ok_or(DomainError::BusinessRule {
            message: "User has no room assigned".to_string(),
        })?;

        let room = self
            .room_repository
            .find_room(&room_no)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Room {}", room_no),
            })?;

        self.room_repository
            .find_room_type(room.room_type_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "RoomType".to_string(),
            })
    }
}
