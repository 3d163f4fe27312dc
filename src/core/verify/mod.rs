//! Consistency checks on desugared output
pub mod binding;
