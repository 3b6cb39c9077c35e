//! Core arithmetic layer
//!
//! The validation gate, the four operations and the untyped operand value.
//! Nothing in here performs I/O or logging.

pub mod operations;
pub mod validate;
pub mod value;
