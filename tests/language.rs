use calcapi::{calculate, error::ErrorKind};

#[allow(clippy::float_cmp)]
fn assert_success(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: ErrorKind) {
    match calculate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), expected, "'{src}' failed with '{e}'"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_success("2+2", 4.0);
    assert_success("7-4", 3.0);
    assert_success("15/3", 5.0);
    assert_success("50*3-30", 120.0);
    assert_success("10+20+33+40+55", 158.0);
    assert_success("1/4", 0.25);
    assert_success("0.1+0.2", 0.1 + 0.2);
}

#[test]
fn precedence_and_left_associativity() {
    assert_success("7+7/7", 8.0);
    assert_success("3+3*3", 12.0);
    assert_success("4+4*5", 24.0);
    assert_success("3+6/3*4", 11.0);
    assert_success("1+2+3-4+5-6", 1.0);
    assert_success("22-2+5", 25.0);
    assert_success("100/10/2", 5.0);
    assert_success("16/2*4", 32.0);
    assert_success("11/11*4", 4.0);
}

#[test]
fn parentheses() {
    assert_success("5*(7+9)", 80.0);
    assert_success("(14+6)/5", 4.0);
    assert_success("22-(15-5)", 12.0);
    assert_success("(2)", 2.0);
    assert_success("(2+3*(12) + 9)", 47.0);
    assert_success("((2+5) * (2+3) +12) *3", 141.0);
    assert_success("(5+4+3)/(2+1) * 9 / 3", 12.0);
    assert_success("(48/6) * 5 /((3+1) * (2+3)) -3", -1.0);
    assert_success("((8+2) / (3+2) * 6) / 9 * (30 - ((5+10)*2)) -2", -2.0);
    assert_success("((3+4)*(5*(6+3) - 48 / (2+4) * (1+2)) - (8-3)) + (9 * (4-3 * (2+2)))", 70.0);
}

#[test]
fn unary_signs() {
    assert_success("-2", -2.0);
    assert_success("-2+3", 1.0);
    assert_success("-50+50", 0.0);
    assert_success("-(6+7)", -13.0);
    assert_success("+(3+9)", 12.0);
    assert_success("6+ -2", 4.0);
    assert_success("12*-2", -24.0);
    assert_success("10*(12/6*-2)", -40.0);
    assert_success("7+ -3 + 9 - -4", 17.0);
    assert_success("5++5", 10.0);
}

#[test]
fn plus_sign_may_precede_minus_sign() {
    assert_success("+-5", -5.0);
    assert_success("(+-3)", -3.0);
    assert_success("2*+-3", -6.0);
    assert_success("+ -(2+2)", -4.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_success(" ( 3 + 3 ) *2 ", 12.0);
    assert_success("1 2 + 3", 15.0);
    assert_success("\t4\n*\r2", 8.0);
    assert_success("1\u{0B}+2", 3.0);
    assert_success("1\u{A0}+2", 3.0);
}

#[test]
fn division_is_floating_point() {
    assert_success("7/2", 3.5);
    assert_success("-7/2", -3.5);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("10/0", ErrorKind::DivisionByZero);
    assert_failure("7/0", ErrorKind::DivisionByZero);
    assert_failure("1/(3-3)", ErrorKind::DivisionByZero);
    assert_failure("2+(4*(1/(0.0)))", ErrorKind::DivisionByZero);
}

#[test]
fn invalid_characters_are_errors() {
    for src in ["5 + h", "22^37", "11^0", "-2^4", "cucumber", "fgsfds", "'25", "61k+5t", "собака", "9+t"] {
        assert_failure(src, ErrorKind::InvalidCharInExpression);
    }
}

#[test]
fn unmatched_parentheses_are_errors() {
    for src in ["32+23)", "2+4-3)", ")29+3("] {
        assert_failure(src, ErrorKind::OpeningParenthesisMissing);
    }
    for src in ["(23+32", "4+(5-1", "5*(15+2", "(((((8))))", "3+2*(1", "(5+7*9",
                "7*(12+6*(27+3*(4+9) + 4 * (11+2) + 5 )"]
    {
        assert_failure(src, ErrorKind::ClosingParenthesisMissing);
    }
}

#[test]
fn malformed_expressions_are_errors() {
    for src in ["", "     ", "()", "*42", "*6", "4+", "6*", "-", "-+", "7**5", "--5", "2(3)", "1.2.3", "."] {
        assert_failure(src, ErrorKind::InvalidExpression);
    }
}

#[test]
fn literals_beyond_f64_range_are_errors() {
    assert_failure(&"9".repeat(400), ErrorKind::InvalidExpression);
    assert_failure(&format!("{}+1", "9".repeat(400)), ErrorKind::InvalidExpression);
}

#[test]
fn repeated_calls_agree() {
    for src in ["(48/6) * 5 /((3+1) * (2+3)) -3", "10/0", "(1", "5 + h"] {
        assert_eq!(calculate(src), calculate(src));
    }
}

#[test]
fn calls_from_many_threads() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || calculate(&format!("{i}*(2+3)")))
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap().unwrap();
        assert!((value - 5.0 * i as f64).abs() < f64::EPSILON);
    }
}
