//! The surface syntax tree handed to the desugarer
pub mod ast;
pub mod make;
