//! The calculator engine: owns the stack and evaluates it after every change.

use crate::config::Config;
use crate::describe::describe_all;
use crate::error::{CalcError, Failure};
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::format::NumberFormatter;
use crate::operators::operators_map;
use crate::program::{from_tokens, resolve_token, to_tokens, Program};
use crate::types::{lookup, Instruction, OperatorMap};
use crate::vars::Vars;
use std::sync::Arc;

/// A reverse-Polish calculator.
///
/// Every mutating call returns the value of the stack after the change, the
/// same as calling [`evaluate`](Self::evaluate) right after it.
///
/// ```
/// use rpn_calc::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.push_operand(4.0);
/// calc.push_operand(2.0);
/// assert_eq!(calc.perform_operation("÷"), Some(2.0));
/// assert_eq!(calc.description(), "4 ÷ 2");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    stack: Vec<Instruction>,
    operators: Arc<OperatorMap>,
    vars: Vars,
    formatter: NumberFormatter,
    error_label: String,
    failure: Option<Failure>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Calculator {
            stack: Vec::new(),
            operators: Arc::new(operators_map()),
            vars: Vars::new(),
            formatter: config.formatter(),
            error_label: config.error_label.clone(),
            failure: None,
        }
    }

    pub fn stack(&self) -> &[Instruction] {
        &self.stack
    }

    pub fn operators(&self) -> &OperatorMap {
        &self.operators
    }

    pub fn formatter(&self) -> &NumberFormatter {
        &self.formatter
    }

    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    /// The instruction an operator symbol would push, if it is known.
    pub fn lookup(&self, symbol: &str) -> Option<Instruction> {
        lookup(&self.operators, symbol)
    }

    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        self.push(Instruction::Operand(value))
    }

    /// Pushes a reference to variable `name`. The empty name cannot be
    /// bound, so it is not pushed.
    pub fn push_variable(&mut self, name: &str) -> Option<f64> {
        if name.is_empty() {
            log::debug!("ignoring empty variable name");
            return self.evaluate();
        }
        self.push(Instruction::Variable(name.to_string()))
    }

    /// Pushes a known operation. Unknown symbols leave the stack untouched.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        match self.lookup(symbol) {
            Some(instruction) => self.push(instruction),
            None => {
                log::debug!("ignoring unknown operation {:?}", symbol);
                self.evaluate()
            }
        }
    }

    /// Pushes whatever `token` denotes: an operation, a number or a variable.
    /// The empty token pushes nothing.
    pub fn push_token(&mut self, token: &str) -> Option<f64> {
        match resolve_token(token, &self.operators, &self.formatter) {
            Some(instruction) => self.push(instruction),
            None => {
                log::debug!("ignoring empty token");
                self.evaluate()
            }
        }
    }

    fn push(&mut self, instruction: Instruction) -> Option<f64> {
        log::debug!("push {:?}", instruction);
        self.stack.push(instruction);
        self.evaluate()
    }

    /// Removes the top instruction, if any.
    pub fn pop(&mut self) -> Option<f64> {
        if let Some(instruction) = self.stack.pop() {
            log::debug!("pop {:?}", instruction);
        }
        self.evaluate()
    }

    /// Empties the stack. Variables are kept.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.failure = None;
    }

    pub fn clear_variables(&mut self) {
        self.vars.clear();
    }

    /// Evaluates the whole stack and records why it failed, if it did.
    pub fn evaluate(&mut self) -> Option<f64> {
        let mut ctx = EvalCtx::new(&self.vars, &self.operators);
        let evaluation = evaluate(&self.stack, &mut ctx);
        let result = evaluation.result;
        log::trace!(
            "{:?} = {:?} with {} left over",
            self.stack,
            result,
            evaluation.remainder.len()
        );
        self.failure = ctx.into_failure();
        result
    }

    /// Evaluates with `name` temporarily bound to `value`.
    ///
    /// The previous binding of `name` is restored afterwards, or removed if
    /// there was none.
    pub fn evaluate_with(&mut self, name: &str, value: f64) -> Result<Option<f64>, CalcError> {
        let saved = self.vars.get(name);
        self.vars.set(name, Some(value))?;
        let result = self.evaluate();
        self.vars.set(name, saved)?;
        Ok(result)
    }

    /// The failure recorded by the last evaluation.
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// The last failure as shown to the user, e.g. `Error: division by zero`.
    pub fn failure_description(&self) -> Option<String> {
        self.failure
            .as_ref()
            .map(|failure| format!("{}: {}", self.error_label, failure))
    }

    /// The infix form of the stack. Append `" ="` for display.
    pub fn description(&self) -> String {
        describe_all(&self.stack, &self.formatter)
    }

    /// Label for a graph of the newest expression, e.g. `y(M) = M × 2`.
    pub fn function_label(&self, variable: &str) -> String {
        let description = self.description();
        let last = description.rsplit(", ").next().unwrap_or(&description);
        format!("y({}) = {}", variable, last)
    }

    /// What a display field shows for `result`: the number, else the last
    /// failure, else `0`.
    pub fn display(&self, result: Option<f64>) -> String {
        match result {
            Some(value) => self.formatter.format(value),
            None => self.failure_description().unwrap_or_else(|| "0".to_string()),
        }
    }

    pub fn set_variable(&mut self, name: &str, value: Option<f64>) -> Result<(), CalcError> {
        self.vars.set(name, value)
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.vars.get(name)
    }

    /// The stack as a persistable token list.
    pub fn program(&self) -> Program {
        to_tokens(&self.stack, &self.formatter)
    }

    /// Replaces the stack with the one `program` describes. The failure of
    /// the replaced stack is forgotten; call [`evaluate`](Self::evaluate) to
    /// learn whether the new one fails.
    pub fn load_program(&mut self, program: &Program) {
        self.stack = from_tokens(program, &self.operators, &self.formatter);
        self.failure = None;
        log::debug!("loaded program with {} instructions", self.stack.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_operation_is_not_pushed() {
        let mut calc = Calculator::new();
        calc.push_operand(3.0);
        assert_eq!(calc.perform_operation("mod"), Some(3.0));
        assert_eq!(calc.stack().len(), 1);
    }

    #[test]
    fn pop_on_empty_stack_is_harmless() {
        let mut calc = Calculator::new();
        assert_eq!(calc.pop(), None);
        assert!(calc.stack().is_empty());
    }

    #[test]
    fn pop_reevaluates() {
        let mut calc = Calculator::new();
        calc.push_operand(2.0);
        calc.push_operand(0.0);
        assert_eq!(calc.perform_operation("÷"), None);
        assert_eq!(calc.failure(), Some(&Failure::DivisionByZero));
        assert_eq!(calc.pop(), Some(0.0));
        assert_eq!(calc.failure(), None);
    }

    #[test]
    fn clear_keeps_variables() {
        let mut calc = Calculator::new();
        calc.set_variable("M", Some(4.0)).unwrap();
        calc.push_variable("M");
        calc.clear();
        assert!(calc.stack().is_empty());
        assert_eq!(calc.variable("M"), Some(4.0));
        calc.clear_variables();
        assert_eq!(calc.variable("M"), None);
    }

    #[test]
    fn display_falls_back_to_failure_then_zero() {
        let mut calc = Calculator::new();
        let result = calc.evaluate();
        assert_eq!(calc.display(result), "0");
        let result = calc.push_variable("x");
        assert_eq!(calc.display(result), "Error: variable x not set");
        calc.set_variable("x", Some(1234.5)).unwrap();
        let result = calc.evaluate();
        assert_eq!(calc.display(result), "1 234.5");
    }

    #[test]
    fn error_label_comes_from_config() {
        let config = Config {
            error_label: "Fehler".to_string(),
            ..Config::default()
        };
        let mut calc = Calculator::with_config(&config);
        calc.push_operand(-1.0);
        calc.perform_operation("√");
        assert_eq!(
            calc.failure_description().as_deref(),
            Some("Fehler: √ of negative number")
        );
    }

    #[test]
    fn empty_variable_name_is_not_pushed() {
        let mut calc = Calculator::new();
        calc.push_operand(3.0);
        assert_eq!(calc.push_variable(""), Some(3.0));
        assert_eq!(calc.push_token(""), Some(3.0));
        assert_eq!(calc.stack(), &[Instruction::Operand(3.0)]);
        assert_eq!(calc.failure(), None);
        assert!(calc.set_variable("", Some(1.0)).is_err());
    }

    #[test]
    fn load_program_forgets_previous_failure() {
        let mut calc = Calculator::new();
        calc.push_operand(1.0);
        calc.push_operand(0.0);
        assert_eq!(calc.perform_operation("÷"), None);
        assert_eq!(calc.failure(), Some(&Failure::DivisionByZero));

        let program: Program = ["2", "3", "+"].into_iter().collect();
        calc.load_program(&program);
        assert_eq!(calc.failure(), None);
        assert_eq!(calc.failure_description(), None);
        assert_eq!(calc.evaluate(), Some(5.0));
    }

    #[test]
    fn function_label_uses_newest_expression() {
        let mut calc = Calculator::new();
        calc.push_operand(7.0);
        calc.push_variable("M");
        calc.push_operand(2.0);
        calc.perform_operation("×");
        assert_eq!(calc.function_label("M"), "y(M) = M × 2");
    }
}
