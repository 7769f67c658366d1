//! Result types for the booking service

/// A confirmed booking: the claimed room and a fresh session token
/// carrying the upgraded resident role.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub room_no: String,
    pub token: String,
}

/// A completed room-type reassignment.
#[derive(Debug, Clone)]
pub struct Reassignment {
    pub new_room_no: String,
    pub new_room_type: String,
}
