//! Reverse-Polish desk calculator engine.
//!
//! # Overview
//!
//! A [`Calculator`] keeps a stack of [`Instruction`]s: operands, operations,
//! constants and variable references. The stack is evaluated from its top
//! down to a number and, independently, printed as an infix expression with
//! only the parentheses precedence requires. A stack round-trips through a
//! [`Program`], a flat list of tokens meant for persistence.
//!
//! # Example
//!
//! ```
//! use rpn_calc::Calculator;
//!
//! let mut calc = Calculator::new();
//! for token in ["2", "3", "+", "4", "×"] {
//!     calc.push_token(token);
//! }
//! assert_eq!(calc.evaluate(), Some(20.0));
//! assert_eq!(calc.description(), "(2 + 3) × 4");
//! assert_eq!(calc.program().tokens(), ["2", "3", "+", "4", "×"]);
//! ```

pub mod calculator;
pub mod config;
pub mod describe;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod format;
pub mod history;
pub mod operators;
pub mod plot;
pub mod program;
pub mod types;
pub mod vars;

pub use calculator::Calculator;
pub use config::Config;
pub use describe::{describe, describe_all, Description};
pub use error::{CalcError, Failure};
pub use eval_ctx::EvalCtx;
pub use evaluate::{evaluate, Evaluation};
pub use format::NumberFormatter;
pub use history::ProgramHistory;
pub use operators::operators_map;
pub use plot::{linspace, sample, Point};
pub use program::{from_tokens, to_tokens, Program};
pub use types::{Instruction, OperatorDefinition, OperatorMap, Operation, PRECEDENCE_MAX};
pub use vars::Vars;
