//! Numeric evaluation of an instruction stack.

use crate::error::Failure;
use crate::eval_ctx::EvalCtx;
use crate::types::{Instruction, Operation};

/// The outcome of evaluating the top of a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'s> {
    /// The value of the top expression, if it could be computed.
    pub result: Option<f64>,
    /// The part of the stack below the consumed expression.
    pub remainder: &'s [Instruction],
}

impl<'s> Evaluation<'s> {
    fn new(result: Option<f64>, remainder: &'s [Instruction]) -> Self {
        Evaluation { result, remainder }
    }
}

/// Evaluates the expression on top of `ops`, consuming operands right to left.
///
/// The input is never modified; the unconsumed part is returned as
/// [`Evaluation::remainder`]. When no value can be produced for an operation
/// because an operand is missing, the whole of `ops` is handed back.
/// Failures are recorded in `ctx` and yield no value.
pub fn evaluate<'s>(ops: &'s [Instruction], ctx: &mut EvalCtx<'_>) -> Evaluation<'s> {
    let Some((top, rest)) = ops.split_last() else {
        return Evaluation::new(None, ops);
    };

    match top {
        Instruction::Operand(value) => return Evaluation::new(Some(*value), rest),
        Instruction::Unary(symbol) => {
            if let Some(Operation::Unary { apply, validate }) = ctx.operation(symbol) {
                let operand = evaluate(rest, ctx);
                if let Some(x) = operand.result {
                    if let Some(failure) = validate.and_then(|check| check(x)) {
                        ctx.fail(failure);
                        return Evaluation::new(None, operand.remainder);
                    }
                    return Evaluation::new(Some(apply(x)), operand.remainder);
                }
            }
        }
        Instruction::Binary(symbol) => {
            if let Some(Operation::Binary { apply, validate }) = ctx.operation(symbol) {
                let op1 = evaluate(rest, ctx);
                if let Some(a) = op1.result {
                    let op2 = evaluate(op1.remainder, ctx);
                    match op2.result {
                        Some(b) => {
                            if let Some(failure) = validate.and_then(|check| check(a, b)) {
                                ctx.fail(failure);
                                return Evaluation::new(None, op2.remainder);
                            }
                            return Evaluation::new(Some(apply(a, b)), op2.remainder);
                        }
                        None => ctx.fail(Failure::MissingOperand),
                    }
                }
            }
        }
        Instruction::Constant(symbol) => {
            if let Some(Operation::Constant { produce }) = ctx.operation(symbol) {
                return Evaluation::new(Some(produce()), rest);
            }
        }
        Instruction::Variable(name) => {
            let value = ctx.vars.get(name);
            if value.is_none() {
                ctx.fail(Failure::UndefinedVariable(name.clone()));
            }
            return Evaluation::new(value, rest);
        }
    }

    Evaluation::new(None, ops)
}
