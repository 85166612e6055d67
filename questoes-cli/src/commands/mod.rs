//! Command implementations for the questoes CLI

pub mod serve;

pub use serve::run_serve;
