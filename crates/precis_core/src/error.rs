use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input must have more than one sentence")]
    TooFewSentences,

    #[error("Invalid ratio: {0} (expected a value in (0, 1])")]
    InvalidRatio(f64),

    #[error("Analysis error: {0}")]
    Analysis(String),
}

impl Error {
    /// Whether the failure was caused by the caller's input rather than the engine.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidRatio(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
