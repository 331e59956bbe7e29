pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;

pub use config::ClientConfig;
pub use domain::errors::{DomainError, DomainResult};
