pub mod booking;
pub mod functions;
pub mod health;
