//! Error type of the sample application.

use thiserror::Error;

/// Everything that can go wrong between reading the environment and printing
/// a sequence.
///
/// # Examples
///
/// ```
/// use sequences::SampleError;
///
/// let error = SampleError::UnknownSequence("evens".to_string());
/// assert_eq!(error.to_string(), "Unknown sequence: evens");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SampleError {
    /// An environment variable is set but its value is unusable.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// Name of the environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// `SEQUENCE_NAME` does not name a known sequence.
    #[error("Unknown sequence: {0}")]
    UnknownSequence(String),

    /// The start value is outside the domain of the chosen sequence.
    #[error("{sequence} cannot start at {start}")]
    InvalidStart {
        /// Name of the sequence.
        sequence: String,
        /// The rejected start value.
        start: u64,
    },
}

impl SampleError {
    /// Builds an [`SampleError::InvalidValue`] for `key`.
    #[must_use]
    pub fn invalid_value(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
