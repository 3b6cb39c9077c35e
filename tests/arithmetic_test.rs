use calcheus::{add, divide, evaluate, multiply, subtract, validate_numbers, CalcError, ErrorKind, Operation, Value};

#[test]
fn test_end_to_end_scenarios() {
    assert_eq!(add(5.0, 3.0), Ok(8.0));
    assert_eq!(subtract(10.0, 4.0), Ok(6.0));
    assert_eq!(multiply(6.0, 7.0), Ok(42.0));
    assert_eq!(divide(20.0, 4.0), Ok(5.0));
}

#[test]
fn test_binary_rounding_is_kept() {
    let sum = add(0.1, 0.2).unwrap();
    assert_eq!(sum, 0.30000000000000004);
    assert_ne!(sum, 0.3);
}

#[test]
fn test_error_kinds_through_the_public_api() {
    let cases = [
        (Operation::Divide, Value::from(10), Value::from(0), ErrorKind::DivisionByZero),
        (Operation::Add, Value::from("5"), Value::from(3), ErrorKind::Type),
        (Operation::Add, Value::from(3), Value::from("5"), ErrorKind::Type),
        (Operation::Multiply, Value::from(f64::NAN), Value::from(5), ErrorKind::InvalidValue),
        (Operation::Add, Value::from(f64::INFINITY), Value::from(5), ErrorKind::InvalidValue),
        (Operation::Subtract, Value::from(1), Value::from(f64::NEG_INFINITY), ErrorKind::InvalidValue),
    ];

    for (op, a, b, kind) in cases {
        let err = evaluate(op, &a, &b).unwrap_err();
        assert_eq!(err.kind(), kind, "{} {} {}", a, op.symbol(), b);
    }
}

#[test]
fn test_validate_reports_first_failing_check() {
    assert_eq!(validate_numbers(&Value::Null, &Value::from(f64::NAN)), Err(CalcError::NotNumbers));
    assert_eq!(
        validate_numbers(&Value::from(f64::NAN), &Value::from(f64::INFINITY)),
        Err(CalcError::NotANumber)
    );
    assert_eq!(validate_numbers(&Value::from(2), &Value::from(-4.25)), Ok(()));
}

#[test]
fn test_tokens_from_the_command_line() {
    let a = Value::parse_token("7");
    let b = Value::parse_token("2");
    assert_eq!(evaluate(Operation::Divide, &a, &b), Ok(3.5));

    let err = evaluate(Operation::Add, &Value::parse_token("\"5\""), &Value::parse_token("3")).unwrap_err();
    assert_eq!(err.to_string(), "Both arguments must be numbers");
}
