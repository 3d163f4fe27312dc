extern crate codespan;
extern crate codespan_reporting;
extern crate indexmap;
extern crate itertools;
extern crate pretty;
extern crate serde_json;
extern crate thiserror;
#[macro_use]
extern crate lazy_static;

pub mod common;
pub mod core;
pub mod driver;
pub mod syntax;
