//! Behavior tests for the reduction runtime as generated code uses it.

use listfold::{apply, assoc, get, range, reduce, EvalError, Op, Value};

#[test]
fn test_generated_literals_render() {
    // The code generator emits print calls for list and map literals;
    // their rendered forms are what its golden files assert on.
    let rows: Value = serde_json::from_str("[[1, 2, 3], [4, 5, 6], [7, 8, 9]]").unwrap();
    let Value::List(rows) = rows else {
        panic!("expected a list of rows");
    };
    let rendered: Vec<String> = rows.iter().map(Value::to_string).collect();
    assert_eq!(rendered, ["[1, 2, 3]", "[4, 5, 6]", "[7, 8, 9]"]);

    let map: Value = serde_json::from_str(r#"{"z": 3, "y": 2}"#).unwrap();
    assert_eq!(map.to_string(), r#"{"y": 2, "z": 3}"#);
}

#[test]
fn test_variadic_arithmetic() {
    let values: Vec<Value> = (1..=9).map(Value::Int).collect();
    assert_eq!(reduce(Op::Add, &values), Ok(Value::Int(45)));
    assert_eq!(reduce(Op::Mul, &values), Ok(Value::Int(362880)));
}

#[test]
fn test_mixed_numeric_fold() {
    let values = [Value::Int(1), Value::Float(2.5), Value::Int(3)];
    assert_eq!(reduce(Op::Add, &values), Ok(Value::Float(6.5)));
}

#[test]
fn test_board_style_row_sums() {
    // A 3x3 grid of +1/-1/0 marks summed row by row, the way the
    // original game's win check uses the runtime.
    let board = [1, 1, 1, -1, -1, 0, 0, 0, 0];
    let row_sum = |r: usize| {
        let cells: Vec<Value> = board[r * 3..r * 3 + 3]
            .iter()
            .map(|&m| Value::Int(m))
            .collect();
        reduce(Op::Add, &cells)
    };
    assert_eq!(row_sum(0), Ok(Value::Int(3)));
    assert_eq!(row_sum(1), Ok(Value::Int(-2)));
    assert_eq!(row_sum(2), Ok(Value::Int(0)));
}

#[test]
fn test_container_round_trip() {
    let mut grid = range(9);
    assoc(&mut grid, &Value::Int(4), Value::Int(-1)).unwrap();
    assert_eq!(get(&grid, &Value::Int(4)), Ok(Value::Int(-1)));
    assert_eq!(get(&grid, &Value::Int(-9)), Ok(Value::Int(0)));
    assert_eq!(
        get(&grid, &Value::from("4")),
        Err(EvalError::BadKey {
            container: "list",
            key: "string",
        })
    );
}

#[test]
fn test_equality_fold_two_elements() {
    assert_eq!(
        reduce(Op::Eq, &[Value::Int(2), Value::Int(2)]),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        apply(Op::Ge, &Value::Int(3), &Value::Int(2)),
        Ok(Value::Bool(true))
    );
}

#[test]
fn test_error_messages_name_types() {
    let err = reduce(Op::And, &[Value::Int(1), Value::Int(2)]).unwrap_err();
    assert_eq!(err.to_string(), "and is not defined for int and int");
    assert_eq!(
        EvalError::DivisionByZero.to_string(),
        "division by zero"
    );
}
