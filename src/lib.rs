// Library exports for the setup binary and tests
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
