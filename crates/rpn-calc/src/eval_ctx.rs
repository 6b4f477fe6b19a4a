use crate::error::Failure;
use crate::types::{OperatorMap, Operation};
use crate::vars::Vars;

/// The context threaded through a single evaluation walk.
///
/// Holds the operator map and variable store the walk reads from, plus the
/// failure slot it writes to.
pub struct EvalCtx<'a> {
    /// The variable store.
    pub vars: &'a Vars,
    /// The operator map used to resolve operation symbols.
    pub operators: &'a OperatorMap,
    failure: Option<Failure>,
}

impl<'a> EvalCtx<'a> {
    pub fn new(vars: &'a Vars, operators: &'a OperatorMap) -> Self {
        EvalCtx {
            vars,
            operators,
            failure: None,
        }
    }

    /// Looks up what the operator behind `symbol` does.
    pub fn operation(&self, symbol: &str) -> Option<Operation> {
        self.operators.get(symbol).map(|def| def.operation)
    }

    /// Records a failure. The first failure of a walk is kept.
    ///
    /// Later failures are usually consequences of the first: in `[M, 5, +]`
    /// with `M` unset, `+` also comes up short of an operand, and keeping the
    /// last one would report `MissingOperand` instead of naming `M`.
    pub fn fail(&mut self, failure: Failure) {
        if self.failure.is_none() {
            self.failure = Some(failure);
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn into_failure(self) -> Option<Failure> {
        self.failure
    }
}
