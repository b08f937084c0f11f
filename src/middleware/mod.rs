pub mod cors;
pub mod request_logging;

pub use cors::cors_middleware;
pub use request_logging::request_logging_middleware;
