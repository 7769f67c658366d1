//! Main booking service implementation

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::rent::{Payment, RentDueStatus};
use crate::domain::rent_schedule;
use crate::errors::{AuthError, DomainError, DomainResult, PaymentError};
use crate::repositories::{LedgerRepository, RoomRepository, UserRepository};
use crate::services::payment::{signature, GatewayOrder, PaymentGateway};
use crate::services::token::TokenService;

use super::types::{BookingConfirmation, Reassignment};

/// Booking service: gateway order creation, payment confirmation for
/// both the booking and rent flows, and room-type reassignment.
pub struct BookingService<U, R, L, G>
where
    U: UserRepository,
    R: RoomRepository,
    L: LedgerRepository,
    G: PaymentGateway,
{
    user_repository: Arc<U>,
    room_repository: Arc<R>,
    ledger: Arc<L>,
    gateway: Arc<G>,
    token_service: Arc<TokenService>,
}

impl<U, R, L, G> BookingService<U, R, L, G>
where
    U: UserRepository,
    R: RoomRepository,
    L: LedgerRepository,
    G: PaymentGateway,
{
    pub fn new(
        user_repository: Arc<U>,
        room_repository: Arc<R>,
        ledger: Arc<L>,
        gateway: Arc<G>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            room_repository,
            ledger,
            gateway,
            token_service,
        }
    }

    /// All room types, for the public browsing surface.
    pub async fn room_types(&self) -> DomainResult<Vec<crate::domain::entities::room::RoomType>> {
        self.room_repository.list_room_types().await
    }

    /// Room types a resident can still move into.
    pub async fn available_room_types(
        &self,
    ) -> DomainResult<Vec<crate::domain::entities::room::RoomType>> {
        self.room_repository.list_available_room_types().await
    }

    /// Create a gateway order for a room booking.
    ///
    /// Availability and double-booking are checked up front so the user
    /// is never charged for a room they cannot get.
    pub async fn create_booking_order(
        &self,
        user_id: Uuid,
        room_type_id: Uuid,
        total_rent: u32,
    ) -> DomainResult<GatewayOrder> {
        if self
            .room_repository
            .find_available_room(room_type_id)
            .await?
            .is_none()
        {
            return Err(DomainError::Payment(PaymentError::NoRoomAvailable));
        }

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;
        if user.room_no.is_some() {
            return Err(DomainError::Payment(PaymentError::AlreadyBooked));
        }

        self.gateway.create_order(total_rent).await
    }

    /// Create a gateway order for a monthly rent payment.
    pub async fn create_rent_order(&self, total_rent: u32) -> DomainResult<GatewayOrder> {
        self.gateway.create_order(total_rent).await
    }

    /// Confirm a booking payment: verify the checkout signature, claim a
    /// room, promote the guest to resident, and record the payment.
    pub async fn confirm_booking(
        &self,
        user_id: Uuid,
        room_type_id: Uuid,
        order: &GatewayOrder,
        order_id: &str,
        payment_id: &str,
        checkout_signature: &str,
    ) -> DomainResult<BookingConfirmation> {
        if !signature::verify(
            self.gateway.key_secret(),
            order_id,
            payment_id,
            checkout_signature,
        ) {
            return Err(DomainError::Payment(PaymentError::SignatureMismatch));
        }

        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;
        if user.room_no.is_some() {
            return Err(DomainError::Payment(PaymentError::AlreadyBooked));
        }

        let room = self
            .room_repository
            .claim_room(room_type_id)
            .await?
            .ok_or(DomainError::Payment(PaymentError::NoRoomAvailable))?;

        user.promote_to_resident(room.room_no.clone());
        let user = self.user_repository.update(user).await?;

        self.ledger
            .record_payment(Payment::record(user_id, order.amount_in_units()))
            .await?;

        // Fresh token: the old one still says "guest".
        let token = self.token_service.issue(user.id, user.role)?;

        tracing::info!(
            user_id = %user_id,
            room_no = %room.room_no,
            event = "room_booked",
            "Booking payment confirmed; room assigned"
        );

        Ok(BookingConfirmation {
            room_no: room.room_no,
            token,
        })
    }

    /// Confirm a rent payment: verify the checkout signature, settle the
    /// month's due, and record the payment.
    ///
    /// A replayed confirmation finds no unpaid due and fails; there is
    /// no separate dedup key.
    pub async fn confirm_rent_payment(
        &self,
        user_id: Uuid,
        today: NaiveDate,
        order: &GatewayOrder,
        order_id: &str,
        payment_id: &str,
        checkout_signature: &str,
    ) -> DomainResult<()> {
        if !signature::verify(
            self.gateway.key_secret(),
            order_id,
            payment_id,
            checkout_signature,
        ) {
            return Err(DomainError::Payment(PaymentError::SignatureMismatch));
        }

        let anchor = rent_schedule::month_start(today);
        let due = self
            .ledger
            .find_due(user_id, anchor, RentDueStatus::Unpaid)
            .await?
            .ok_or(DomainError::Payment(PaymentError::NoUnpaidRent))?;

        self.ledger.mark_due_paid(due.id).await?;
        self.ledger
            .record_payment(Payment::record(user_id, order.amount_in_units()))
            .await?;

        tracing::info!(
            user_id = %user_id,
            month = %due.rent_month,
            event = "rent_paid",
            "Rent payment confirmed"
        );
        Ok(())
    }

    /// Move a resident to a different room type.
    ///
    /// Returns `Ok(None)` when the requested type equals the current
    /// one: a no-op the client renders as `{"status": false}`, not an
    /// error. The new room is claimed before the old one is released so
    /// a failed reassignment leaves everything untouched.
    pub async fn reassign_room_type(
        &self,
        user_id: Uuid,
        room_no: &str,
        new_room_type_id: Uuid,
    ) -> DomainResult<Option<Reassignment>> {
        let old_room = self
            .room_repository
            .find_room(room_no)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Room {}", room_no),
            })?;

        if old_room.room_type_id == new_room_type_id {
            return Ok(None);
        }

        let new_room = self
            .room_repository
            .claim_room(new_room_type_id)
            .await?
            .ok_or(DomainError::Payment(PaymentError::NoRoomOfType))?;

        self.room_repository.release_room(room_no).await?;

        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;
        user.reassign_room(new_room.room_no.clone());
        self.user_repository.update(user).await?;

        let new_room_type = self
            .room_repository
            .find_room_type(new_room_type_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "RoomType".to_string(),
            })?;

        tracing::info!(
            user_id = %user_id,
            from = room_no,
            to = %new_room.room_no,
            event = "room_reassigned",
            "Resident moved to a new room type"
        );

        Ok(Some(Reassignment {
            new_room_no: new_room.room_no,
            new_room_type: new_room_type.name,
        }))
    }
}
