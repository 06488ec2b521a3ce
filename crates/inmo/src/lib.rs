//! Back-office client for a real-estate listings backend: catalog
//! maintenance, the property editor wizard and its save workflow.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod property;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod validation;

pub use error::AppError;
