//! Booking service tests with in-memory collaborators.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::rent::{RentDue, RentDueStatus};
use crate::domain::entities::room::{Room, RoomStatus, RoomType, RoomTypeStatus};
use crate::domain::entities::user::{Address, User, UserRole};
use crate::errors::{DomainError, PaymentError};
use crate::repositories::ledger::MockLedgerRepository;
use crate::repositories::room::MockRoomRepository;
use crate::repositories::user::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::payment::{signature, GatewayOrder, PaymentGateway};
use crate::services::token::TokenService;

use super::BookingService;

const SECRET: &str = "test_key_secret";

struct MockGateway {
    counter: AtomicU64,
}

impl MockGateway {
    fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_order(&self, amount: u32) -> Result<GatewayOrder, DomainError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(GatewayOrder {
            id: format!("order_test_{}", n),
            amount: amount as u64 * 100,
            currency: "INR".to_string(),
            receipt: format!("PAY-{}", n),
            status: "created".to_string(),
        })
    }

    fn key_secret(&self) -> &str {
        SECRET
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn guest() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        full_name: "Devika Raj".to_string(),
        email: "devika@example.com".to_string(),
        password_hash: "$2b$04$hash".to_string(),
        date_of_birth: d(2002, 1, 30),
        gender: "Female".to_string(),
        mobile_number: "9876598765".to_string(),
        aadhar_number: "210987654321".to_string(),
        parent_name: "Rajan Kumar".to_string(),
        parent_mobile_number: "9876500003".to_string(),
        blood_group: "AB+".to_string(),
        address: Address {
            house_name: "Devi Nivas".to_string(),
            area: "Sasthamangalam".to_string(),
            landmark: "Near temple".to_string(),
            city: "Thiruvananthapuram".to_string(),
            state: "Kerala".to_string(),
            country: "India".to_string(),
            pincode: "695010".to_string(),
        },
        role: UserRole::Guest,
        room_no: None,
        date_of_admission: None,
        created_at: now,
        updated_at: now,
    }
}

struct Fixture {
    service: BookingService<MockUserRepository, MockRoomRepository, MockLedgerRepository, MockGateway>,
    users: Arc<MockUserRepository>,
    rooms: Arc<MockRoomRepository>,
    ledger: Arc<MockLedgerRepository>,
    user_id: Uuid,
    two_share: Uuid,
    six_share: Uuid,
}

/// A guest plus two room types: a two-share with one half-full room,
/// and a six-share with one empty room.
async fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let rooms = Arc::new(MockRoomRepository::new());
    let ledger = Arc::new(MockLedgerRepository::new());
    let gateway = Arc::new(MockGateway::new());
    let tokens = Arc::new(TokenService::new("test-secret", 3600));

    let two_share = Uuid::new_v4();
    rooms
        .insert_room_type(RoomType {
            id: two_share,
            title: "Standard 2 Bed Dorm".to_string(),
            name: "Two-Share".to_string(),
            description: "Two beds, shared bathroom".to_string(),
            capacity: 2,
            rent: 5000,
            admission_fees: 1000,
            status: RoomTypeStatus::Available,
        })
        .await;
    rooms
        .insert_room(Room {
            room_no: "A101".to_string(),
            room_type_id: two_share,
            capacity: 2,
            occupants: 1,
            status: RoomStatus::Available,
        })
        .await;

    let six_share = Uuid::new_v4();
    rooms
        .insert_room_type(RoomType {
            id: six_share,
            title: "Standard 6 Bed Dorm".to_string(),
            name: "Six-Share".to_string(),
            description: "Six beds, shared bathroom".to_string(),
            capacity: 6,
            rent: 3000,
            admission_fees: 800,
            status: RoomTypeStatus::Available,
        })
        .await;
    rooms
        .insert_room(Room {
            room_no: "D10".to_string(),
            room_type_id: six_share,
            capacity: 6,
            occupants: 0,
            status: RoomStatus::Available,
        })
        .await;

    let user = guest();
    let user_id = user.id;
    users.insert(user).await;

    let service = BookingService::new(
        users.clone(),
        rooms.clone(),
        ledger.clone(),
        gateway,
        tokens,
    );

    Fixture {
        service,
        users,
        rooms,
        ledger,
        user_id,
        two_share,
        six_share,
    }
}

fn signed(order: &GatewayOrder, payment_id: &str) -> String {
    signature::sign(SECRET, &order.id, payment_id)
}

#[tokio::test]
async fn test_booking_flow_promotes_guest_and_fills_room() {
    let fx = fixture().await;

    let order = fx
        .service
        .create_booking_order(fx.user_id, fx.two_share, 6000)
        .await
        .unwrap();
    assert_eq!(order.amount, 600_000);

    let sig = signed(&order, "pay_1");
    let confirmation = fx
        .service
        .confirm_booking(fx.user_id, fx.two_share, &order, &order.id, "pay_1", &sig)
        .await
        .unwrap();
    assert_eq!(confirmation.room_no, "A101");
    assert!(!confirmation.token.is_empty());

    // Room filled and flipped.
    let room = fx.rooms.room("A101").await.unwrap();
    assert_eq!(room.occupants, 2);
    assert_eq!(room.status, RoomStatus::Occupied);

    // The only room of the type is full, so the type closes.
    let room_type = fx.rooms.room_type(fx.two_share).await.unwrap();
    assert_eq!(room_type.status, RoomTypeStatus::Unavailable);

    // Guest promoted with admission date stamped.
    let user = fx.users.find_by_id(fx.user_id).await.unwrap().unwrap();
    assert_eq!(user.role, UserRole::Resident);
    assert_eq!(user.room_no.as_deref(), Some("A101"));
    assert!(user.date_of_admission.is_some());
    assert!(user.invariant_holds());

    // Exactly one ledger entry.
    assert_eq!(fx.ledger.payment_count().await, 1);
}

#[tokio::test]
async fn test_booking_with_bad_signature_mutates_nothing() {
    let fx = fixture().await;

    let order = fx
        .service
        .create_booking_order(fx.user_id, fx.two_share, 6000)
        .await
        .unwrap();

    let err = fx
        .service
        .confirm_booking(
            fx.user_id,
            fx.two_share,
            &order,
            &order.id,
            "pay_1",
            "forged-signature",
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Payment(PaymentError::SignatureMismatch)
    ));

    let user = fx.users.find_by_id(fx.user_id).await.unwrap().unwrap();
    assert_eq!(user.role, UserRole::Guest);
    assert_eq!(fx.rooms.room("A101").await.unwrap().occupants, 1);
    assert_eq!(fx.ledger.payment_count().await, 0);
}

#[tokio::test]
async fn test_double_booking_rejected() {
    let fx = fixture().await;

    let order = fx
        .service
        .create_booking_order(fx.user_id, fx.two_share, 6000)
        .await
        .unwrap();
    let sig = signed(&order, "pay_1");
    fx.service
        .confirm_booking(fx.user_id, fx.two_share, &order, &order.id, "pay_1", &sig)
        .await
        .unwrap();

    let err = fx
        .service
        .create_booking_order(fx.user_id, fx.six_share, 3800)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Payment(PaymentError::AlreadyBooked)
    ));
}

#[tokio::test]
async fn test_order_rejected_when_type_is_full() {
    let fx = fixture().await;

    // Fill the two-share's only open slot with another booking.
    let other = {
        let mut u = guest();
        u.email = "other@example.com".to_string();
        u.mobile_number = "9876511111".to_string();
        u
    };
    let other_id = other.id;
    fx.users.insert(other).await;
    let order = fx
        .service
        .create_booking_order(other_id, fx.two_share, 6000)
        .await
        .unwrap();
    let sig = signed(&order, "pay_other");
    fx.service
        .confirm_booking(other_id, fx.two_share, &order, &order.id, "pay_other", &sig)
        .await
        .unwrap();

    let err = fx
        .service
        .create_booking_order(fx.user_id, fx.two_share, 6000)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Payment(PaymentError::NoRoomAvailable)
    ));
}

#[tokio::test]
async fn test_rent_payment_settles_due_once() {
    let fx = fixture().await;
    let today = d(2026, 3, 4);

    let due = RentDue {
        id: Uuid::new_v4(),
        user_id: fx.user_id,
        rent_month: "March".to_string(),
        rent_date: d(2026, 3, 1),
        rent_amount: 5000,
        fine: 0,
        last_date_without_fine: d(2026, 3, 5),
        last_date_with_fine: d(2026, 3, 10),
        status: RentDueStatus::Unpaid,
    };
    let due_id = due.id;
    fx.ledger.insert_due(due).await;

    let order = fx.service.create_rent_order(5000).await.unwrap();
    let sig = signed(&order, "pay_rent");
    fx.service
        .confirm_rent_payment(fx.user_id, today, &order, &order.id, "pay_rent", &sig)
        .await
        .unwrap();

    assert_eq!(
        fx.ledger.due(due_id).await.unwrap().status,
        RentDueStatus::Paid
    );
    assert_eq!(fx.ledger.payment_count().await, 1);

    // Replaying the confirmation finds no unpaid due.
    let err = fx
        .service
        .confirm_rent_payment(fx.user_id, today, &order, &order.id, "pay_rent", &sig)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Payment(PaymentError::NoUnpaidRent)
    ));
    assert_eq!(fx.ledger.payment_count().await, 1);
}

#[tokio::test]
async fn test_rent_payment_with_bad_signature_mutates_nothing() {
    let fx = fixture().await;
    let today = d(2026, 3, 4);

    let due = RentDue {
        id: Uuid::new_v4(),
        user_id: fx.user_id,
        rent_month: "March".to_string(),
        rent_date: d(2026, 3, 1),
        rent_amount: 5000,
        fine: 0,
        last_date_without_fine: d(2026, 3, 5),
        last_date_with_fine: d(2026, 3, 10),
        status: RentDueStatus::Unpaid,
    };
    let due_id = due.id;
    fx.ledger.insert_due(due).await;

    let order = fx.service.create_rent_order(5000).await.unwrap();
    let err = fx
        .service
        .confirm_rent_payment(fx.user_id, today, &order, &order.id, "pay_rent", "forged")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Payment(PaymentError::SignatureMismatch)
    ));

    assert_eq!(
        fx.ledger.due(due_id).await.unwrap().status,
        RentDueStatus::Unpaid
    );
    assert_eq!(fx.ledger.payment_count().await, 0);
}

#[tokio::test]
async fn test_reassign_to_same_type_is_a_noop() {
    let fx = fixture().await;

    // Book into the two-share first.
    let order = fx
        .service
        .create_booking_order(fx.user_id, fx.two_share, 6000)
        .await
        .unwrap();
    let sig = signed(&order, "pay_1");
    fx.service
        .confirm_booking(fx.user_id, fx.two_share, &order, &order.id, "pay_1", &sig)
        .await
        .unwrap();

    let result = fx
        .service
        .reassign_room_type(fx.user_id, "A101", fx.two_share)
        .await
        .unwrap();
    assert!(result.is_none());

    // Nothing moved.
    assert_eq!(fx.rooms.room("A101").await.unwrap().occupants, 2);
    assert_eq!(fx.rooms.room("D10").await.unwrap().occupants, 0);
}

#[tokio::test]
async fn test_reassign_moves_resident_between_types() {
    let fx = fixture().await;

    let order = fx
        .service
        .create_booking_order(fx.user_id, fx.two_share, 6000)
        .await
        .unwrap();
    let sig = signed(&order, "pay_1");
    fx.service
        .confirm_booking(fx.user_id, fx.two_share, &order, &order.id, "pay_1", &sig)
        .await
        .unwrap();

    let reassignment = fx
        .service
        .reassign_room_type(fx.user_id, "A101", fx.six_share)
        .await
        .unwrap()
        .expect("reassignment happened");
    assert_eq!(reassignment.new_room_no, "D10");
    assert_eq!(reassignment.new_room_type, "Six-Share");

    // Old room released and its type reopened.
    let old_room = fx.rooms.room("A101").await.unwrap();
    assert_eq!(old_room.occupants, 1);
    assert_eq!(old_room.status, RoomStatus::Available);
    assert_eq!(
        fx.rooms.room_type(fx.two_share).await.unwrap().status,
        RoomTypeStatus::Available
    );

    // New room gained an occupant.
    assert_eq!(fx.rooms.room("D10").await.unwrap().occupants, 1);

    let user = fx.users.find_by_id(fx.user_id).await.unwrap().unwrap();
    assert_eq!(user.room_no.as_deref(), Some("D10"));
    assert_eq!(user.role, UserRole::Resident);
}

#[tokio::test]
async fn test_reassign_fails_cleanly_when_new_type_is_full() {
    let fx = fixture().await;

    let order = fx
        .service
        .create_booking_order(fx.user_id, fx.two_share, 6000)
        .await
        .unwrap();
    let sig = signed(&order, "pay_1");
    fx.service
        .confirm_booking(fx.user_id, fx.two_share, &order, &order.id, "pay_1", &sig)
        .await
        .unwrap();

    // Fill the six-share completely.
    for i in 0..6 {
        let mut r = fx.rooms.room("D10").await.unwrap();
        r.add_occupant();
        assert!(r.occupants == i + 1);
        fx.rooms.insert_room(r).await;
    }

    let err = fx
        .service
        .reassign_room_type(fx.user_id, "A101", fx.six_share)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Payment(PaymentError::NoRoomOfType)
    ));

    // The resident keeps the old room.
    assert_eq!(fx.rooms.room("A101").await.unwrap().occupants, 2);
    let user = fx.users.find_by_id(fx.user_id).await.unwrap().unwrap();
    assert_eq!(user.room_no.as_deref(), Some("A101"));
}
