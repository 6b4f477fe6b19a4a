use crate::error::Failure;
use std::collections::HashMap;
use std::sync::Arc;

/// Precedence of everything that never needs parentheses.
pub const PRECEDENCE_MAX: i32 = i32::MAX;

/// One slot of the calculator stack.
///
/// Operations carry only their symbol. What they compute is looked up in the
/// [`OperatorMap`] when the stack is evaluated, so an instruction is plain
/// data that survives a trip through a [`Program`](crate::Program).
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Operand(f64),
    Unary(String),
    Binary(String),
    Constant(String),
    Variable(String),
}

impl Instruction {
    /// Binding strength used when printing the stack as infix.
    pub fn precedence(&self) -> i32 {
        match self {
            Instruction::Binary(symbol) => binary_precedence(symbol),
            _ => PRECEDENCE_MAX,
        }
    }

    /// The symbol of an operation or variable; `None` for operands.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Instruction::Operand(_) => None,
            Instruction::Unary(s)
            | Instruction::Binary(s)
            | Instruction::Constant(s)
            | Instruction::Variable(s) => Some(s.as_str()),
        }
    }
}

/// Precedence table for binary symbols. Unknown symbols bind weakest.
pub fn binary_precedence(symbol: &str) -> i32 {
    match symbol {
        "^" => 4,
        "×" | "÷" => 3,
        "-" => 2,
        "+" => 1,
        _ => 0,
    }
}

pub type UnaryFn = fn(f64) -> f64;
pub type UnaryCheck = fn(f64) -> Option<Failure>;

/// Binary functions receive `(first popped, second popped)`, so a
/// non-commutative operator computes `second OP first`.
pub type BinaryFn = fn(f64, f64) -> f64;
pub type BinaryCheck = fn(f64, f64) -> Option<Failure>;

pub type ConstantFn = fn() -> f64;

/// What an operator does once its operands are resolved.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Unary {
        apply: UnaryFn,
        validate: Option<UnaryCheck>,
    },
    Binary {
        apply: BinaryFn,
        validate: Option<BinaryCheck>,
    },
    Constant {
        produce: ConstantFn,
    },
}

/// An operator definition: its symbol and behavior.
#[derive(Debug)]
pub struct OperatorDefinition {
    pub symbol: &'static str,
    pub operation: Operation,
}

impl OperatorDefinition {
    /// The stack instruction that refers to this operator.
    pub fn instruction(&self) -> Instruction {
        let symbol = self.symbol.to_string();
        match self.operation {
            Operation::Unary { .. } => Instruction::Unary(symbol),
            Operation::Binary { .. } => Instruction::Binary(symbol),
            Operation::Constant { .. } => Instruction::Constant(symbol),
        }
    }
}

/// Map of operator symbol -> definition.
pub type OperatorMap = HashMap<String, Arc<OperatorDefinition>>;

/// Builds an `OperatorMap` from a list of operator definitions.
pub fn operators_to_map(operators: Vec<Arc<OperatorDefinition>>) -> OperatorMap {
    let mut map = HashMap::new();
    for op in operators {
        map.insert(op.symbol.to_string(), op);
    }
    map
}

/// Resolves a symbol to the instruction it pushes.
pub fn lookup(operators: &OperatorMap, symbol: &str) -> Option<Instruction> {
    operators.get(symbol).map(|def| def.instruction())
}
