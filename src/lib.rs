//! api-service: MongoDB-gated HTTP service bootstrap.
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod services;
pub mod startup;
