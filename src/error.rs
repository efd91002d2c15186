use thiserror::Error;

use crate::question::InvalidQuestion;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The question source could not be read or parsed.
    #[error("questions unavailable: {0}")]
    DataUnavailable(String),

    /// A record was parsed but breaks the question invariants.
    #[error("question #{index} is invalid: {reason}")]
    DataInvalid {
        index: usize,
        reason: InvalidQuestion,
    },

    /// An answer arrived while no question was awaiting one.
    #[error("no question is awaiting an answer")]
    UnexpectedInput,

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
