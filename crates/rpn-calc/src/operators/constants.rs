//! Zero-argument constants.

use crate::types::{OperatorDefinition, Operation};
use std::f64::consts;
use std::sync::Arc;

fn pi() -> f64 {
    consts::PI
}

fn euler() -> f64 {
    consts::E
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            symbol: "π",
            operation: Operation::Constant { produce: pi },
        }),
        Arc::new(OperatorDefinition {
            symbol: "e",
            operation: Operation::Constant { produce: euler },
        }),
    ]
}
