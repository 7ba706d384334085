//! # Dreamlog Core
//!
//! The domain layer of the dream journal backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, the ports infrastructure must implement, and the monthly
//! sleep/dream statistics.

pub mod domain;
pub mod error;
pub mod ports;
pub mod stats;

pub use error::DomainError;
