//! Use cases

mod create_rental;
mod list_rentals;
mod register_car;

pub use create_rental::{CreateRentalRequest, CreateRentalUseCase};
pub use list_rentals::ListRentalsByUserUseCase;
pub use register_car::{ImportSummary, RegisterCarUseCase};
