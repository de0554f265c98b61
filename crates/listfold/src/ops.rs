//! Binary operators and the left fold that chains them.

use crate::error::EvalError;
use crate::value::Value;
use std::cmp::Ordering;
use tracing::instrument;

/// A binary operator the runtime can fold a list through.
///
/// Parses from either the short name (`add`) or the name the toy
/// language's code generator emits (`plus`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Op {
    /// Addition; also concatenates strings and lists.
    #[strum(to_string = "add", serialize = "plus")]
    Add,
    /// Subtraction.
    #[strum(to_string = "sub", serialize = "minus")]
    Sub,
    /// Multiplication.
    #[strum(to_string = "mul", serialize = "mult")]
    Mul,
    /// Division; floors for integer operands.
    #[strum(to_string = "div")]
    Div,
    /// Modulo; result takes the sign of the divisor.
    #[strum(to_string = "mod")]
    Mod,
    /// Boolean conjunction.
    #[strum(to_string = "and")]
    And,
    /// Boolean disjunction.
    #[strum(to_string = "or")]
    Or,
    /// Equality.
    #[strum(to_string = "eq")]
    Eq,
    /// Inequality.
    #[strum(to_string = "ne", serialize = "neq")]
    Ne,
    /// Less-than.
    #[strum(to_string = "lt")]
    Lt,
    /// Less-than-or-equal.
    #[strum(to_string = "le", serialize = "lte")]
    Le,
    /// Greater-than.
    #[strum(to_string = "gt")]
    Gt,
    /// Greater-than-or-equal.
    #[strum(to_string = "ge", serialize = "gte")]
    Ge,
}

/// Folds a list of values through a binary operator, left to right.
///
/// A single-element list returns that element unchanged, matching the
/// behavior of `reduce` in the source runtime.
///
/// # Errors
///
/// Returns [`EvalError::EmptyInput`] for an empty list, or whatever
/// [`apply`] reports for an incompatible pair of operands.
#[instrument(skip(values), fields(len = values.len()))]
pub fn reduce(op: Op, values: &[Value]) -> Result<Value, EvalError> {
    let (first, rest) = values.split_first().ok_or(EvalError::EmptyInput)?;
    let mut acc = first.clone();
    for value in rest {
        acc = apply(op, &acc, value)?;
    }
    Ok(acc)
}

/// Applies one binary operator to a pair of values.
///
/// Integer pairs stay integral; a float on either side promotes the
/// operation to floats. Comparisons yield `Bool`, so folding a
/// comparison over more than two elements compares a boolean against
/// the remaining values and reports a type mismatch.
#[instrument]
pub fn apply(op: Op, lhs: &Value, rhs: &Value) -> Result<Value, EvalError> {
    match op {
        Op::Add => match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            (Value::List(a), Value::List(b)) => {
                let mut items = a.clone();
                items.extend(b.iter().cloned());
                Ok(Value::List(items))
            }
            _ => float_op(op, lhs, rhs, |a, b| a + b),
        },
        Op::Sub => match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a - b)),
            _ => float_op(op, lhs, rhs, |a, b| a - b),
        },
        Op::Mul => match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a * b)),
            _ => float_op(op, lhs, rhs, |a, b| a * b),
        },
        Op::Div => match (lhs, rhs) {
            (Value::Int(_), Value::Int(0)) => Err(EvalError::DivisionByZero),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(floor_div(*a, *b))),
            _ => {
                let (a, b) = numeric_pair(op, lhs, rhs)?;
                if b == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(Value::Float(a / b))
                }
            }
        },
        Op::Mod => match (lhs, rhs) {
            (Value::Int(_), Value::Int(0)) => Err(EvalError::DivisionByZero),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(floor_mod(*a, *b))),
            _ => {
                let (a, b) = numeric_pair(op, lhs, rhs)?;
                if b == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(Value::Float(a - (a / b).floor() * b))
                }
            }
        },
        Op::And => bool_op(op, lhs, rhs, |a, b| a && b),
        Op::Or => bool_op(op, lhs, rhs, |a, b| a || b),
        Op::Eq => Ok(Value::Bool(loose_eq(lhs, rhs))),
        Op::Ne => Ok(Value::Bool(!loose_eq(lhs, rhs))),
        Op::Lt => compare(op, lhs, rhs, |o| o == Ordering::Less),
        Op::Le => compare(op, lhs, rhs, |o| o != Ordering::Greater),
        Op::Gt => compare(op, lhs, rhs, |o| o == Ordering::Greater),
        Op::Ge => compare(op, lhs, rhs, |o| o != Ordering::Less),
    }
}

/// Indexed read: list by (possibly negative) integer, map by string.
#[instrument]
pub fn get(container: &Value, key: &Value) -> Result<Value, EvalError> {
    match (container, key) {
        (Value::List(items), Value::Int(i)) => {
            let idx = resolve_index(*i, items.len())?;
            Ok(items[idx].clone())
        }
        (Value::List(_), k) => Err(EvalError::BadKey {
            container: "list",
            key: k.type_name(),
        }),
        (Value::Map(entries), Value::Str(k)) => entries
            .get(k)
            .cloned()
            .ok_or_else(|| EvalError::KeyNotFound(k.clone())),
        (Value::Map(_), k) => Err(EvalError::BadKey {
            container: "map",
            key: k.type_name(),
        }),
        (c, _) => Err(EvalError::NotIndexable(c.type_name())),
    }
}

/// Indexed write: replaces a list element or inserts a map entry.
#[instrument]
pub fn assoc(container: &mut Value, key: &Value, value: Value) -> Result<(), EvalError> {
    match (container, key) {
        (Value::List(items), Value::Int(i)) => {
            let idx = resolve_index(*i, items.len())?;
            items[idx] = value;
            Ok(())
        }
        (Value::List(_), k) => Err(EvalError::BadKey {
            container: "list",
            key: k.type_name(),
        }),
        (Value::Map(entries), Value::Str(k)) => {
            entries.insert(k.clone(), value);
            Ok(())
        }
        (Value::Map(_), k) => Err(EvalError::BadKey {
            container: "map",
            key: k.type_name(),
        }),
        (c, _) => Err(EvalError::NotIndexable(c.type_name())),
    }
}

/// Builds the list `[0, 1, .., n-1]`; non-positive `n` yields `[]`.
pub fn range(n: i64) -> Value {
    Value::List((0..n.max(0)).map(Value::Int).collect())
}

/// Negative indices count from the back of the list.
fn resolve_index(index: i64, len: usize) -> Result<usize, EvalError> {
    let adjusted = if index < 0 { index + len as i64 } else { index };
    if adjusted < 0 || adjusted as usize >= len {
        return Err(EvalError::IndexOutOfBounds { index, len });
    }
    Ok(adjusted as usize)
}

/// Floor division, so `-7 div 2 == -4`.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Modulo with the sign of the divisor.
fn floor_mod(a: i64, b: i64) -> i64 {
    a - floor_div(a, b) * b
}

fn numeric_pair(op: Op, lhs: &Value, rhs: &Value) -> Result<(f64, f64), EvalError> {
    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(EvalError::TypeMismatch {
            op,
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }),
    }
}

fn float_op(
    op: Op,
    lhs: &Value,
    rhs: &Value,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let (a, b) = numeric_pair(op, lhs, rhs)?;
    Ok(Value::Float(f(a, b)))
}

fn bool_op(
    op: Op,
    lhs: &Value,
    rhs: &Value,
    f: impl Fn(bool, bool) -> bool,
) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(f(*a, *b))),
        _ => Err(EvalError::TypeMismatch {
            op,
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }),
    }
}

/// Equality that treats `1` and `1.0` as equal, like the source
/// runtime's dynamically typed `==`.
fn loose_eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => lhs == rhs,
    }
}

fn compare(
    op: Op,
    lhs: &Value,
    rhs: &Value,
    holds: impl Fn(Ordering) -> bool,
) -> Result<Value, EvalError> {
    let ordering = match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        _ => {
            let (a, b) = numeric_pair(op, lhs, rhs)?;
            // Comparisons involving NaN are false.
            let Some(ordering) = a.partial_cmp(&b) else {
                return Ok(Value::Bool(false));
            };
            ordering
        }
    };
    Ok(Value::Bool(holds(ordering)))
}
