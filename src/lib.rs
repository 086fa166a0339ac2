pub mod analysis;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod telemetry;
