use rpn_calc::Calculator;

fn check(tokens: &[&str], expected: &str) {
    let mut calc = Calculator::new();
    for token in tokens {
        calc.push_token(token);
    }
    assert_eq!(calc.description(), expected, "tokens: {:?}", tokens);
}

#[test]
fn test_precedence_without_parens() {
    check(&["2", "3", "4", "×", "+"], "2 + 3 × 4");
    check(&["2", "3", "×", "4", "+"], "2 × 3 + 4");
    check(&["2", "3", "^", "4", "×"], "2 ^ 3 × 4");
}

#[test]
fn test_precedence_with_parens() {
    check(&["2", "3", "+", "4", "×"], "(2 + 3) × 4");
    check(&["2", "3", "4", "+", "×"], "2 × (3 + 4)");
    check(&["1", "2", "+", "3", "4", "+", "×"], "(1 + 2) × (3 + 4)");
    check(&["1", "2", "-", "3", "^"], "(1 - 2) ^ 3");
}

#[test]
fn test_unary_constant_and_variable() {
    check(&["π", "2", "÷", "sin"], "sin(π ÷ 2)");
    check(&["M", "√", "e", "+"], "√(M) + e");
    check(&["3", "ᐩ/-"], "ᐩ/-(3)");
}

#[test]
fn test_operands_are_formatted() {
    check(&["1234.5", "0.1", "+"], "1 234.5 + 0.1");
    check(&["1", "3", "÷", "inv"], "inv(1 ÷ 3)");
}

#[test]
fn test_empty_and_incomplete() {
    check(&[], "?");
    check(&["+"], "(?) + (?)");
    check(&["sin"], "sin(?)");
}

#[test]
fn test_multiple_expressions() {
    check(&["1", "2", "+", "3", "4"], "1 + 2, 3, 4");
    check(&["1", "2", "+", "M", "√"], "1 + 2, √(M)");
}

#[test]
fn test_description_is_idempotent() {
    let mut calc = Calculator::new();
    for token in ["1", "2", "+", "π", "×", "7"] {
        calc.push_token(token);
    }
    let first = calc.description();
    assert_eq!(calc.description(), first);
    assert_eq!(calc.stack().len(), 6);
}

#[test]
fn test_description_ignores_variable_values() {
    let mut calc = Calculator::new();
    calc.set_variable("M", Some(3.0)).unwrap();
    calc.push_variable("M");
    assert_eq!(calc.description(), "M");
}
