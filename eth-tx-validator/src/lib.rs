// Export modules for testing and for the service binary
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod validators;
