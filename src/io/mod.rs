/// Board constants
pub mod configuration;
/// Error types shared by the topology and overlay layers
pub mod error;
