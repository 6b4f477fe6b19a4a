use thiserror::Error;

/// Why an evaluation produced no value.
///
/// Failures are not propagated as `Err`: they are recorded in the evaluation
/// context and the affected subtree simply yields no value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error("division by zero")]
    DivisionByZero,

    #[error("√ of negative number")]
    NegativeRadicand,

    #[error("need 2nd operand")]
    MissingOperand,

    #[error("variable {0} not set")]
    UndefinedVariable(String),
}

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid varname.")]
    InvalidVarname,

    #[error("no stored program at index {0}")]
    OutOfBounds(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
