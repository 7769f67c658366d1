//! Mock implementation of RoomRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::room::{Room, RoomStatus, RoomType, RoomTypeStatus};
use crate::errors::DomainError;

use super::trait_::RoomRepository;

#[derive(Default)]
struct Inventory {
    rooms: HashMap<String, Room>,
    room_types: HashMap<Uuid, RoomType>,
}

/// In-memory room inventory for tests.
///
/// Claim and release run under one write lock, mirroring the
/// transactional guarantee of the MySQL implementation.
pub struct MockRoomRepository {
    inner: Arc<RwLock<Inventory>>,
}

impl MockRoomRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inventory::default())),
        }
    }

    pub async fn insert_room(&self, room: Room) {
        self.inner.write().await.rooms.insert(room.room_no.clone(), room);
    }

    pub async fn insert_room_type(&self, room_type: RoomType) {
        self.inner
            .write()
            .await
            .room_types
            .insert(room_type.id, room_type);
    }

    /// Snapshot a room for assertions.
    pub async fn room(&self, room_no: &str) -> Option<Room> {
        self.inner.read().await.rooms.get(room_no).cloned()
    }

    /// Snapshot a room type for assertions.
    pub async fn room_type(&self, id: Uuid) -> Option<RoomType> {
        self.inner.read().await.room_types.get(&id).cloned()
    }
}

impl Default for MockRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn all_occupied(inventory: &Inventory, room_type_id: Uuid) -> bool {
    inventory
        .rooms
        .values()
        .filter(|r| r.room_type_id == room_type_id)
        .all(|r| r.status == RoomStatus::Occupied)
}

#[async_trait]
impl RoomRepository for MockRoomRepository {
    async fn find_room(&self, room_no: &str) -> Result<Option<Room>, DomainError> {
        Ok(self.inner.read().await.rooms.get(room_no).cloned())
    }

    async fn find_room_type(&self, id: Uuid) -> Result<Option<RoomType>, DomainError> {
        Ok(self.inner.read().await.room_types.get(&id).cloned())
    }

    async fn list_room_types(&self) -> Result<Vec<RoomType>, DomainError> {
        Ok(self.inner.read().await.room_types.values().cloned().collect())
    }

    async fn list_available_room_types(&self) -> Result<Vec<RoomType>, DomainError> {
        Ok(self
            .inner
            .read()
            .await
            .room_types
            .values()
            .filter(|t| t.status == RoomTypeStatus::Available)
            .cloned()
            .collect())
    }

    async fn find_available_room(&self, room_type_id: Uuid) -> Result<Option<Room>, DomainError> {
        let inventory = self.inner.read().await;
        Ok(inventory
            .rooms
            .values()
            .find(|r| r.room_type_id == room_type_id && r.status == RoomStatus::Available)
            .cloned())
    }

    async fn claim_room(&self, room_type_id: Uuid) -> Result<Option<Room>, DomainError> {
        let mut inventory = self.inner.write().await;

        let Some(room_no) = inventory
            .rooms
            .values()
            .find(|r| r.room_type_id == room_type_id && r.status == RoomStatus::Available)
            .map(|r| r.room_no.clone())
        else {
            return Ok(None);
        };

        let claimed = {
            let room = inventory.rooms.get_mut(&room_no).expect("room exists");
            room.add_occupant();
            room.clone()
        };

        if all_occupied(&inventory, room_type_id) {
            if let Some(room_type) = inventory.room_types.get_mut(&room_type_id) {
                room_type.status = RoomTypeStatus::Unavailable;
            }
        }

        Ok(Some(claimed))
    }

    async fn release_room(&self, room_no: &str) -> Result<Room, DomainError> {
        let mut inventory = self.inner.write().await;

        let released = {
            let room = inventory
                .rooms
                .get_mut(room_no)
                .ok_or_else(|| DomainError::NotFound {
                    resource: format!("Room {}", room_no),
                })?;
            room.remove_occupant();
            room.clone()
        };

        if let Some(room_type) = inventory.room_types.get_mut(&released.room_type_id) {
            if room_type.status == RoomTypeStatus::Unavailable {
                room_type.status = RoomTypeStatus::Available;
            }
        }

        Ok(released)
    }
}
