//! Profile completion scoring for the CSN networking platform.

pub mod config;
pub mod error;
pub mod profile;
pub mod telemetry;
