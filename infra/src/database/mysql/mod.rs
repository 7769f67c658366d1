//! MySQL repository implementations.

mod ledger_repository;
mod residence_repository;
mod room_repository;
mod user_repository;

pub use ledger_repository::MySqlLedgerRepository;
pub use residence_repository::MySqlResidenceRepository;
pub use room_repository::MySqlRoomRepository;
pub use user_repository::MySqlUserRepository;
