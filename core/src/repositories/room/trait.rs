//! Room-inventory repository trait covering rooms and room types.
//!
//! Rooms and room types are one aggregate here: every occupancy change
//! can flip the owning type's availability, so the two always move
//! together. `claim_room` and `release_room` are the only ways the
//! service layer mutates occupancy, and implementations must make each
//! one atomic (a single transaction in MySQL, a single lock in the
//! mock) so concurrent bookings cannot double-assign the last room.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::room::{Room, RoomType};
use crate::errors::DomainError;

/// Repository contract for the room inventory.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by its room number.
    async fn find_room(&self, room_no: &str) -> Result<Option<Room>, DomainError>;

    /// Find a room type by id.
    async fn find_room_type(&self, id: Uuid) -> Result<Option<RoomType>, DomainError>;

    /// All room types, regardless of availability.
    async fn list_room_types(&self) -> Result<Vec<RoomType>, DomainError>;

    /// Room types that still have at least one available room.
    async fn list_available_room_types(&self) -> Result<Vec<RoomType>, DomainError>;

    /// Any available room of the given type, without claiming it.
    /// Order creation probes availability before charging the user.
    async fn find_available_room(&self, room_type_id: Uuid) -> Result<Option<Room>, DomainError>;

    /// Atomically claim one available room of the given type.
    ///
    /// Increments the room's occupant count, flips it to Occupied when
    /// full, and flips the room type to Unavailable when every room of
    /// the type is now occupied.
    ///
    /// # Returns
    /// * `Ok(Some(Room))` - the claimed room, post-update
    /// * `Ok(None)` - no available room of this type
    async fn claim_room(&self, room_type_id: Uuid) -> Result<Option<Room>, DomainError>;

    /// Atomically release one occupant from a room.
    ///
    /// Decrements the occupant count, flips the room back to Available
    /// if it was Occupied, and flips the owning room type back to
    /// Available if it was Unavailable.
    ///
    /// # Returns
    /// * `Ok(Room)` - the released room, post-update
    /// * `Err(DomainError::NotFound)` - no such room
    async fn release_room(&self, room_no: &str) -> Result<Room, DomainError>;
}
