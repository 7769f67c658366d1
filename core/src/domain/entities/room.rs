//! Room and room-type entities making up the hostel inventory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Occupancy status of an individual room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
}

/// Availability of a room type across all of its rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomTypeStatus {
    Available,
    Unavailable,
}

/// An individual room. Keyed by its human-facing room number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room number, e.g. "A101"
    pub room_no: String,

    /// The room type this room belongs to
    pub room_type_id: Uuid,

    /// Number of beds
    pub capacity: u32,

    /// Current occupant count, 0 ..= capacity
    pub occupants: u32,

    /// Occupied iff occupants == capacity
    pub status: RoomStatus,
}

impl Room {
    /// Add one occupant, flipping to Occupied when full.
    ///
    /// Returns false without mutating when the room is already full.
    pub fn add_occupant(&mut self) -> bool {
        if self.occupants >= self.capacity {
            return false;
        }
        self.occupants += 1;
        if self.occupants == self.capacity {
            self.status = RoomStatus::Occupied;
        }
        true
    }

    /// Remove one occupant, flipping back to Available.
    ///
    /// Returns false without mutating when the room is already empty.
    pub fn remove_occupant(&mut self) -> bool {
        if self.occupants == 0 {
            return false;
        }
        self.occupants -= 1;
        if self.occupants < self.capacity && self.status == RoomStatus::Occupied {
            self.status = RoomStatus::Available;
        }
        true
    }

    /// The occupancy invariant: Occupied iff full.
    pub fn invariant_holds(&self) -> bool {
        (self.status == RoomStatus::Occupied) == (self.occupants == self.capacity)
    }
}

/// A bookable room category with its pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: Uuid,

    /// Marketing title, e.g. "Standard 6 Bed Dorm Shared Bathroom"
    pub title: String,

    /// Short name, e.g. "Six-Share"
    pub name: String,

    pub description: String,

    /// Beds per room of this type
    pub capacity: u32,

    /// Monthly rent in whole currency units
    pub rent: u32,

    /// One-time admission fee in whole currency units
    pub admission_fees: u32,

    /// Unavailable iff every room of this type is occupied
    pub status: RoomTypeStatus,
}

impl RoomType {
    pub fn is_available(&self) -> bool {
        self.status == RoomTypeStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(capacity: u32, occupants: u32) -> Room {
        let status = if occupants == capacity {
            RoomStatus::Occupied
        } else {
            RoomStatus::Available
        };
        Room {
            room_no: "A101".to_string(),
            room_type_id: Uuid::new_v4(),
            capacity,
            occupants,
            status,
        }
    }

    #[test]
    fn test_add_occupant_flips_status_at_capacity() {
        let mut r = room(2, 1);
        assert!(r.add_occupant());
        assert_eq!(r.occupants, 2);
        assert_eq!(r.status, RoomStatus::Occupied);
        assert!(r.invariant_holds());
    }

    #[test]
    fn test_add_occupant_rejected_when_full() {
        let mut r = room(2, 2);
        assert!(!r.add_occupant());
        assert_eq!(r.occupants, 2);
    }

    #[test]
    fn test_remove_occupant_reopens_room() {
        let mut r = room(3, 3);
        assert!(r.remove_occupant());
        assert_eq!(r.occupants, 2);
        assert_eq!(r.status, RoomStatus::Available);
        assert!(r.invariant_holds());
    }

    #[test]
    fn test_remove_occupant_rejected_when_empty() {
        let mut r = room(3, 0);
        assert!(!r.remove_occupant());
    }

    #[test]
    fn test_invariant_across_fill_and_drain() {
        let mut r = room(4, 0);
        for _ in 0..4 {
            assert!(r.invariant_holds());
            r.add_occupant();
        }
        assert_eq!(r.status, RoomStatus::Occupied);
        for _ in 0..4 {
            assert!(r.invariant_holds());
            r.remove_occupant();
        }
        assert_eq!(r.status, RoomStatus::Available);
        assert!(r.invariant_holds());
    }
}
