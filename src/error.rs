use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShamirError {
    #[error("insufficient shares: have {have}, need {need}")]
    InsufficientShares { have: usize, need: usize },

    #[error("threshold must be at least 1")]
    InvalidThreshold,

    #[error("degenerate share set: duplicate x value {x}")]
    DegenerateShareSet { x: i64 },

    #[error("division requires a positive divisor, got {divisor}")]
    InvalidDivisor { divisor: i64 },

    #[error("unsupported base {base}, expected 2..=36")]
    UnsupportedBase { base: u32 },

    #[error("invalid digit '{ch}' for base {base}")]
    InvalidDigit { ch: char, base: u32 },

    #[error("inconsistent shares: term division left remainder {remainder} of {divisor}")]
    InconsistentShares { remainder: i64, divisor: i64 },

    #[error("Lagrange coefficient exceeds 64-bit range")]
    CoefficientOverflow,

    #[error("malformed share document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("share key '{key}' is not a valid x value")]
    InvalidShareKey { key: String },

    #[error("share base '{value}' is not an integer")]
    InvalidBaseField { value: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShamirError>;
