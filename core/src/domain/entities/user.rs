//! User entity representing a registered guest or resident.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user within the hostel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A signed-up user without a room (including evicted former residents)
    Guest,
    /// A user currently assigned a room
    Resident,
}

/// Postal address captured during admission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub house_name: String,
    pub area: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    pub full_name: String,

    /// Login email, unique across users
    pub email: String,

    /// bcrypt hash of the password; never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub date_of_birth: NaiveDate,

    pub gender: String,

    /// 10-digit mobile number, unique across users
    pub mobile_number: String,

    pub aadhar_number: String,

    pub parent_name: String,

    pub parent_mobile_number: String,

    pub blood_group: String,

    pub address: Address,

    /// Current role; Resident iff a room is assigned
    pub role: UserRole,

    /// Room currently assigned, if any
    pub room_no: Option<String>,

    /// Stamped when a booking payment promotes the user to resident
    pub date_of_admission: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Promote a guest to resident, assigning the given room and
    /// stamping the admission date.
    pub fn promote_to_resident(&mut self, room_no: String) {
        self.role = UserRole::Resident;
        self.room_no = Some(room_no);
        self.date_of_admission = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Demote a resident back to guest, clearing the room assignment.
    pub fn demote_to_guest(&mut self) {
        self.role = UserRole::Guest;
        self.room_no = None;
        self.updated_at = Utc::now();
    }

    /// Move the resident to a different room.
    pub fn reassign_room(&mut self, room_no: String) {
        self.room_no = Some(room_no);
        self.updated_at = Utc::now();
    }

    /// Replace the password hash.
    pub fn set_password_hash(&mut self, hash: String) {
        self.password_hash = hash;
        self.updated_at = Utc::now();
    }

    pub fn is_resident(&self) -> bool {
        self.role == UserRole::Resident
    }

    /// The role/room invariant: resident iff a room is assigned.
    pub fn invariant_holds(&self) -> bool {
        (self.role == UserRole::Resident) == self.room_no.is_some()
    }
}
