pub mod appointment;
pub mod user;

pub use appointment::PostgresAppointmentRepository;
pub use user::PostgresUserRepository;
