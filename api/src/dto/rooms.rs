//! Room browsing and assignment bodies.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignNewRoomTypeDto {
    pub user_id: Uuid,
    pub room_no: String,
    pub new_room_type_id: Uuid,
}
