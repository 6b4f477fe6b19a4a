//! Infix rendering of an instruction stack.

use crate::format::NumberFormatter;
use crate::types::{Instruction, PRECEDENCE_MAX};

/// Text shown in place of a missing operand.
pub const PLACEHOLDER: &str = "?";

/// The infix text of the expression on top of a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Description<'s> {
    pub text: String,
    /// The part of the stack below the described expression.
    pub remainder: &'s [Instruction],
    /// How tightly the outermost operator of `text` binds.
    pub precedence: i32,
}

/// Describes the expression on top of `ops`.
///
/// Consumes the stack in the same right-to-left order as
/// [`evaluate`](crate::evaluate()), but never looks at variable values.
pub fn describe<'s>(ops: &'s [Instruction], formatter: &NumberFormatter) -> Description<'s> {
    let Some((top, rest)) = ops.split_last() else {
        return Description {
            text: PLACEHOLDER.to_string(),
            remainder: ops,
            precedence: 0,
        };
    };

    match top {
        Instruction::Operand(value) => Description {
            text: formatter.format(*value),
            remainder: rest,
            precedence: PRECEDENCE_MAX,
        },
        Instruction::Unary(symbol) => {
            let operand = describe(rest, formatter);
            Description {
                text: format!("{}({})", symbol, operand.text),
                remainder: operand.remainder,
                precedence: PRECEDENCE_MAX,
            }
        }
        Instruction::Binary(symbol) => {
            let precedence = top.precedence();
            let op1 = describe(rest, formatter);
            let op2 = describe(op1.remainder, formatter);
            let lhs = parenthesize(op2.text, op2.precedence < precedence);
            let rhs = parenthesize(op1.text, op1.precedence < precedence);
            Description {
                text: format!("{} {} {}", lhs, symbol, rhs),
                remainder: op2.remainder,
                precedence,
            }
        }
        Instruction::Constant(symbol) | Instruction::Variable(symbol) => Description {
            text: symbol.clone(),
            remainder: rest,
            precedence: PRECEDENCE_MAX,
        },
    }
}

fn parenthesize(text: String, wrap: bool) -> String {
    if wrap {
        format!("({})", text)
    } else {
        text
    }
}

/// Describes every expression left on the stack, oldest first, separated by
/// `", "`. An empty stack describes as `"?"`.
pub fn describe_all(ops: &[Instruction], formatter: &NumberFormatter) -> String {
    let mut result = String::new();
    let mut remainder = ops;
    loop {
        let current = describe(remainder, formatter);
        result = if result.is_empty() {
            current.text
        } else {
            format!("{}, {}", current.text, result)
        };
        remainder = current.remainder;
        if remainder.is_empty() {
            return result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> Instruction {
        Instruction::Operand(v)
    }

    fn bin(s: &str) -> Instruction {
        Instruction::Binary(s.to_string())
    }

    #[test]
    fn empty_stack_is_placeholder() {
        let d = describe(&[], &NumberFormatter::new());
        assert_eq!(d.text, "?");
        assert_eq!(d.precedence, 0);
    }

    #[test]
    fn binary_reports_its_own_precedence() {
        let stack = [num(1.0), num(2.0), bin("^")];
        let d = describe(&stack, &NumberFormatter::new());
        assert_eq!(d.text, "1 ^ 2");
        assert_eq!(d.precedence, 4);
        assert!(d.remainder.is_empty());
    }

    #[test]
    fn missing_operands_become_placeholders() {
        let f = NumberFormatter::new();
        assert_eq!(describe_all(&[Instruction::Unary("√".into())], &f), "√(?)");
        assert_eq!(describe_all(&[num(5.0), bin("+")], &f), "(?) + 5");
    }

    #[test]
    fn disconnected_expressions_are_joined_oldest_first() {
        let f = NumberFormatter::new();
        let stack = [num(1.0), num(2.0), bin("+"), num(3.0), Instruction::Variable("M".into())];
        assert_eq!(describe_all(&stack, &f), "1 + 2, 3, M");
    }
}
