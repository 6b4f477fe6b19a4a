//! Unary functions.

use crate::error::Failure;
use crate::types::{OperatorDefinition, Operation};
use std::sync::Arc;

fn check_radicand(x: f64) -> Option<Failure> {
    if x < 0.0 {
        Some(Failure::NegativeRadicand)
    } else {
        None
    }
}

fn check_nonzero(x: f64) -> Option<Failure> {
    if x == 0.0 {
        Some(Failure::DivisionByZero)
    } else {
        None
    }
}

fn invert(x: f64) -> f64 {
    1.0 / x
}

fn negate(x: f64) -> f64 {
    -x
}

fn unary(
    symbol: &'static str,
    apply: fn(f64) -> f64,
    validate: Option<fn(f64) -> Option<Failure>>,
) -> Arc<OperatorDefinition> {
    Arc::new(OperatorDefinition {
        symbol,
        operation: Operation::Unary { apply, validate },
    })
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        unary("√", f64::sqrt, Some(check_radicand)),
        unary("sin", f64::sin, None),
        unary("cos", f64::cos, None),
        unary("tan", f64::tan, None),
        unary("asin", f64::asin, None),
        unary("acos", f64::acos, None),
        unary("atan", f64::atan, None),
        unary("inv", invert, Some(check_nonzero)),
        unary("ln", f64::ln, None),
        unary("exp", f64::exp, None),
        unary("ᐩ/-", negate, None),
    ]
}
