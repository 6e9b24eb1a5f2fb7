//! Infrastructure layer - persistence implementations, clocks, loaders

mod sync;

pub mod date_provider;
pub mod fleet_loader;
pub mod in_memory;
pub mod persistence;

pub use date_provider::{FixedDateProvider, SystemDateProvider};
