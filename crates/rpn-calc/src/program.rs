//! Conversion between a stack and its persisted token list.

use crate::format::NumberFormatter;
use crate::types::{lookup, Instruction, OperatorMap};
use serde::{Deserialize, Serialize};

/// A stack serialized as plain tokens, oldest instruction first.
///
/// Serializes as a bare JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(Vec<String>);

impl Program {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Program {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Program(iter.into_iter().map(Into::into).collect())
    }
}

/// Serializes a stack. Operands go through `formatter`, so their precision
/// is capped at its fraction digits.
pub fn to_tokens(ops: &[Instruction], formatter: &NumberFormatter) -> Program {
    ops.iter()
        .map(|ins| match ins {
            Instruction::Operand(value) => formatter.format(*value),
            Instruction::Unary(s)
            | Instruction::Binary(s)
            | Instruction::Constant(s)
            | Instruction::Variable(s) => s.clone(),
        })
        .collect()
}

/// Resolves one token: a known operator first, then a number, and anything
/// else is a variable name. The empty token names nothing and resolves to
/// `None`, since no variable can be bound under it.
pub fn resolve_token(
    token: &str,
    operators: &OperatorMap,
    formatter: &NumberFormatter,
) -> Option<Instruction> {
    if token.is_empty() {
        return None;
    }
    if let Some(instruction) = lookup(operators, token) {
        return Some(instruction);
    }
    Some(match formatter.parse(token) {
        Some(value) => Instruction::Operand(value),
        None => Instruction::Variable(token.to_string()),
    })
}

/// Rebuilds a stack from its tokens. Empty tokens are dropped.
pub fn from_tokens(
    program: &Program,
    operators: &OperatorMap,
    formatter: &NumberFormatter,
) -> Vec<Instruction> {
    program
        .tokens()
        .iter()
        .filter_map(|token| resolve_token(token, operators, formatter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::operators_map;

    #[test]
    fn resolution_order() {
        let ops = operators_map();
        let f = NumberFormatter::new();
        let resolve = |token| resolve_token(token, &ops, &f);
        assert_eq!(resolve("-"), Some(Instruction::Binary("-".into())));
        assert_eq!(resolve("e"), Some(Instruction::Constant("e".into())));
        assert_eq!(resolve("-2.5"), Some(Instruction::Operand(-2.5)));
        assert_eq!(resolve("M"), Some(Instruction::Variable("M".into())));
        assert_eq!(resolve("pi"), Some(Instruction::Variable("pi".into())));
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn empty_tokens_are_dropped_on_load() {
        let ops = operators_map();
        let f = NumberFormatter::new();
        let program: Program = ["2", "", "M", "×"].into_iter().collect();
        assert_eq!(
            from_tokens(&program, &ops, &f),
            [
                Instruction::Operand(2.0),
                Instruction::Variable("M".into()),
                Instruction::Binary("×".into()),
            ]
        );
    }

    #[test]
    fn serializes_as_plain_json_array() {
        let program: Program = ["3", "M", "×"].into_iter().collect();
        let json = serde_json::to_string(&program).unwrap();
        assert_eq!(json, r#"["3","M","×"]"#);
        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(back, program);
    }
}
