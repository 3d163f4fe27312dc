//! The core expression representation and the desugaring phase
#![allow(clippy::result_large_err)]
pub mod desugar;
pub mod error;
pub mod export;
pub mod expr;
pub mod verify;
