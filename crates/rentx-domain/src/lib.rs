//! Domain models, repository traits, and the date provider seam

pub mod model;
pub mod provider;
pub mod repository;
