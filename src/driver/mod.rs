//! Command line driver: options, loading, phase timings and output
pub mod error;
pub mod options;
pub mod prepare;
pub mod source;
pub mod statistics;
