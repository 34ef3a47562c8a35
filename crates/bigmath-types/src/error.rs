use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("square root of negative number")]
    NegativeSqrt,

    #[error("{function} argument out of domain [-1, 1]: {value}")]
    OutOfDomain { function: &'static str, value: String },

    #[error("{function} {input}: did not converge after {iterations} iterations")]
    NonConvergence {
        function: &'static str,
        input: String,
        iterations: usize,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Float backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MathError {
    /// Domain violations on user input (sqrt of a negative, asin/acos outside [-1, 1]).
    pub fn is_domain(&self) -> bool {
        matches!(self, MathError::NegativeSqrt | MathError::OutOfDomain { .. })
    }

    /// Whether a REPL session may report the error and keep going.
    ///
    /// Non-convergence and backend failures indicate an algorithmic defect
    /// and must not be swallowed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            MathError::NonConvergence { .. } | MathError::Backend(_)
        )
    }
}

pub type MathResult<T> = Result<T, MathError>;
