//! CSV parsing and serialization for catalog exports.

pub mod parser;
pub mod writer;
