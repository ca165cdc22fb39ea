pub mod appointment;
pub mod errors;
pub mod user;
