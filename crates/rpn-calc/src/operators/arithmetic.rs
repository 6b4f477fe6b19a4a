//! Binary arithmetic operators.
//!
//! Operands arrive as `(a, b)` where `a` was popped first, i.e. `b` is the
//! left-hand side of the infix expression.

use crate::error::Failure;
use crate::types::{OperatorDefinition, Operation};
use std::sync::Arc;

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn divide(a: f64, b: f64) -> f64 {
    b / a
}

fn check_divisor(a: f64, _b: f64) -> Option<Failure> {
    if a == 0.0 {
        Some(Failure::DivisionByZero)
    } else {
        None
    }
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    b - a
}

fn power(a: f64, b: f64) -> f64 {
    b.powf(a)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            symbol: "×",
            operation: Operation::Binary {
                apply: multiply,
                validate: None,
            },
        }),
        Arc::new(OperatorDefinition {
            symbol: "÷",
            operation: Operation::Binary {
                apply: divide,
                validate: Some(check_divisor),
            },
        }),
        Arc::new(OperatorDefinition {
            symbol: "+",
            operation: Operation::Binary {
                apply: add,
                validate: None,
            },
        }),
        Arc::new(OperatorDefinition {
            symbol: "-",
            operation: Operation::Binary {
                apply: subtract,
                validate: None,
            },
        }),
        Arc::new(OperatorDefinition {
            symbol: "^",
            operation: Operation::Binary {
                apply: power,
                validate: None,
            },
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_commutative_operators_use_second_popped_as_lhs() {
        assert_eq!(divide(2.0, 4.0), 2.0);
        assert_eq!(subtract(2.0, 5.0), 3.0);
        assert_eq!(power(3.0, 2.0), 8.0);
    }

    #[test]
    fn divisor_check() {
        assert_eq!(check_divisor(0.0, 5.0), Some(Failure::DivisionByZero));
        assert_eq!(check_divisor(5.0, 0.0), None);
    }
}
