//! Export of core expressions
pub mod pretty;
