//! Application layer: orchestration services and the ports they depend on.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::SiteGenerator;
