//! List Rentals By User

use rentx_domain::model::Rental;
use rentx_domain::repository::RentalRepository;
use rentx_types::Result;

pub struct ListRentalsByUserUseCase<R> {
    rentals: R,
}

impl<R: RentalRepository> ListRentalsByUserUseCase<R> {
    pub fn new(rentals: R) -> Self {
        Self { rentals }
    }

    /// All rentals of the user, newest first
    pub fn execute(&self, user_id: &str) -> Result<Vec<Rental>> {
        self.rentals.find_by_user(user_id)
    }
}
