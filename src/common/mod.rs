//! Facilities shared by the syntax and core phases
pub mod environment;
pub mod prettify;
