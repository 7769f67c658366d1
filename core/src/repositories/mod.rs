//! Repository traits abstracting persistence, plus in-memory mocks for
//! tests. Concrete MySQL implementations live in the infra crate.

pub mod ledger;
pub mod residence;
pub mod room;
pub mod user;

pub use ledger::LedgerRepository;
pub use residence::ResidenceRepository;
pub use room::RoomRepository;
pub use user::UserRepository;
