//! Result types for the rent service

use serde::Serialize;

use crate::domain::entities::room::RoomType;

/// First-month quote for a room type: the prorated rent plus the
/// admission fee.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentQuote {
    pub room_type: RoomType,
    pub dynamic_rent: u32,
    pub total_rent: u32,
}
