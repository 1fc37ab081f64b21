use thiserror::Error;

/// Rejected input for a ledger mutation. The ledger is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("category must not be empty")]
    EmptyCategory,
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
    #[error("unknown transaction type `{0}` (expected `income` or `expense`)")]
    UnknownKind(String),
    #[error("budget must be zero or a positive number, got {0}")]
    InvalidBudget(f64),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("no transaction ids left to assign")]
    IdsExhausted,
}

/// Saved state that could not be decoded. Recovered by the loader, never fatal.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed `{key}` payload: {source}")]
    Json {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed `{key}` value `{raw}`")]
    Value { key: &'static str, raw: String },
}

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}

/// Rejected `config set` input. The saved config is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown config key `{0}` (expected locale, currency or progress_width)")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: &'static str, value: String },
}

/// Failures that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a single shell command. Reported, then the shell keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("exit requested")]
    ExitRequested,
}
