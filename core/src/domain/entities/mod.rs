//! Domain entities for the StayMate system.

pub mod rent;
pub mod residence;
pub mod room;
pub mod token;
pub mod user;
pub mod verification_code;

pub use rent::{Payment, RentDue, RentDueStatus, RentStatus};
pub use residence::{Complaint, LeaveLetter, MenuDay, Review};
pub use room::{Room, RoomStatus, RoomType, RoomTypeStatus};
pub use token::Claims;
pub use user::{Address, User, UserRole};
pub use verification_code::{OtpPurpose, VerificationCode};
