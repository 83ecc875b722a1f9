//! Pages
//!
//! Top-level page components for each route.

pub mod appointment;
pub mod login;
pub mod register;

pub use appointment::Appointment;
pub use login::Login;
pub use register::Register;
