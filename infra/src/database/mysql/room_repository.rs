//! MySQL implementation of the RoomRepository trait.
//!
//! `claim_room` and `release_room` each run in a single transaction
//! with a `SELECT ... FOR UPDATE` row lock, so two concurrent bookings
//! cannot both take the last open slot.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sm_core::domain::entities::room::{Room, RoomStatus, RoomType, RoomTypeStatus};
use sm_core::errors::DomainError;
use sm_core::repositories::RoomRepository;

const ROOM_TYPE_COLUMNS: &str =
    "id, title, name, description, capacity, rent, admission_fees, status";

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database query failed: {}", e),
    }
}

/// MySQL implementation of RoomRepository
pub struct MySqlRoomRepository {
    pool: MySqlPool,
}

impl MySqlRoomRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_room(row: &sqlx::mysql::MySqlRow) -> Result<Room, DomainError> {
        let room_type_id: String = row.try_get("room_type_id").map_err(db_err)?;
        let status: String = row.try_get("status").map_err(db_err)?;

        Ok(Room {
            room_no: row.try_get("room_no").map_err(db_err)?,
            room_type_id: Uuid::parse_str(&room_type_id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            capacity: row.try_get::<i64, _>("capacity").map_err(db_err)? as u32,
            occupants: row.try_get::<i64, _>("occupants").map_err(db_err)? as u32,
            status: if status == "occupied" {
                RoomStatus::Occupied
            } else {
                RoomStatus::Available
            },
        })
    }

    fn row_to_room_type(row: &sqlx::mysql::MySqlRow) -> Result<RoomType, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let status: String = row.try_get("status").map_err(db_err)?;

        Ok(RoomType {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            title: row.try_get("title").map_err(db_err)?,
            name: row.try_get("name").map_err(db_err)?,
            description: row.try_get("description").map_err(db_err)?,
            capacity: row.try_get::<i64, _>("capacity").map_err(db_err)? as u32,
            rent: row.try_get::<i64, _>("rent").map_err(db_err)? as u32,
            admission_fees: row.try_get::<i64, _>("admission_fees").map_err(db_err)? as u32,
            status: if status == "unavailable" {
                RoomTypeStatus::Unavailable
            } else {
                RoomTypeStatus::Available
            },
        })
    }

    fn room_status_str(status: RoomStatus) -> &'static str {
        match status {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
        }
    }
}

#[async_trait]
impl RoomRepository for MySqlRoomRepository {
    async fn find_room(&self, room_no: &str) -> Result<Option<Room>, DomainError> {
        let result = sqlx::query(
            "SELECT room_no, room_type_id, capacity, occupants, status \
             FROM rooms WHERE room_no = ? LIMIT 1",
        )
        .bind(room_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_room(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_room_type(&self, id: Uuid) -> Result<Option<RoomType>, DomainError> {
        let query = format!(
            "SELECT {} FROM room_types WHERE id = ? LIMIT 1",
            ROOM_TYPE_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_room_type(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_room_types(&self) -> Result<Vec<RoomType>, DomainError> {
        let query = format!("SELECT {} FROM room_types ORDER BY rent", ROOM_TYPE_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;
        rows.iter().map(Self::row_to_room_type).collect()
    }

    async fn list_available_room_types(&self) -> Result<Vec<RoomType>, DomainError> {
        let query = format!(
            "SELECT {} FROM room_types WHERE status = 'available' ORDER BY rent",
            ROOM_TYPE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;
        rows.iter().map(Self::row_to_room_type).collect()
    }

    async fn find_available_room(&self, room_type_id: Uuid) -> Result<Option<Room>, DomainError> {
        let result = sqlx::query(
            "SELECT room_no, room_type_id, capacity, occupants, status \
             FROM rooms WHERE room_type_id = ? AND status = 'available' \
             ORDER BY room_no LIMIT 1",
        )
        .bind(room_type_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_room(&row)?)),
            None => Ok(None),
        }
    }

    async fn claim_room(&self, room_type_id: Uuid) -> Result<Option<Room>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let row = sqlx::query(
            "SELECT room_no, room_type_id, capacity, occupants, status \
             FROM rooms WHERE room_type_id = ? AND status = 'available' \
             ORDER BY room_no LIMIT 1 FOR UPDATE",
        )
        .bind(room_type_id.to_string())
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut room = Self::row_to_room(&row)?;
        room.add_occupant();

        sqlx::query("UPDATE rooms SET occupants = ?, status = ? WHERE room_no = ?")
            .bind(room.occupants as i64)
            .bind(Self::room_status_str(room.status))
            .bind(&room.room_no)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        let remaining: i64 = sqlx::query(
            "SELECT COUNT(*) AS cnt FROM rooms \
             WHERE room_type_id = ? AND status = 'available'",
        )
        .bind(room_type_id.to_string())
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?
        .try_get("cnt")
        .map_err(db_err)?;

        if remaining == 0 {
            sqlx::query("UPDATE room_types SET status = 'unavailable' WHERE id = ?")
                .bind(room_type_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
        }

        tx.commit().await.map_err(db_err)?;
        Ok(Some(room))
    }

    async fn release_room(&self, room_no: &str) -> Result<Room, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let row = sqlx::query(
            "SELECT room_no, room_type_id, capacity, occupants, status \
             FROM rooms WHERE room_no = ? LIMIT 1 FOR UPDATE",
        )
        .bind(room_no)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err)?
        .ok_or_else(|| DomainError::NotFound {
            resource: format!("Room {}", room_no),
        })?;

        let mut room = Self::row_to_room(&row)?;
        room.remove_occupant();

        sqlx::query("UPDATE rooms SET occupants = ?, status = ? WHERE room_no = ?")
            .bind(room.occupants as i64)
            .bind(Self::room_status_str(room.status))
            .bind(&room.room_no)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        sqlx::query("UPDATE room_types SET status = 'available' WHERE id = ? AND status = 'unavailable'")
            .bind(room.room_type_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        tx.commit().await.map_err(db_err)?;
        Ok(room)
    }
}
