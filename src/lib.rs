pub mod config;
pub mod errors;
pub mod functions;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
