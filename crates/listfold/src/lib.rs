//! Listfold - variadic reduction over dynamically typed values.
//!
//! This crate provides the runtime helpers emitted for a small toy
//! language: a list of [`Value`]s is folded through a binary [`Op`]
//! (arithmetic, logic, comparison), with container accessors and a
//! print helper on the side.
//!
//! # Example
//!
//! ```
//! use listfold::{reduce, Op, Value};
//!
//! let values = [Value::Int(1), Value::Int(2), Value::Int(3)];
//! assert_eq!(reduce(Op::Add, &values), Ok(Value::Int(6)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod ops;
mod value;

pub use error::EvalError;
pub use ops::{apply, assoc, get, range, reduce, Op};
pub use value::Value;

/// Prints a value to stdout.
///
/// Strings print bare; lists and maps render as literals, so
/// `print_value` output matches what the toy language's generated
/// scripts produce.
pub fn print_value(value: &Value) {
    println!("{value}");
}
