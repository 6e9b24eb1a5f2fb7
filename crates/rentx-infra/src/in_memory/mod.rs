//! In-memory implementations of the repository traits
//!
//! Nothing is persisted; used by tests and short-lived wiring.

mod car_repo;
mod rental_repo;

pub use car_repo::InMemoryCarRepository;
pub use rental_repo::InMemoryRentalRepository;
