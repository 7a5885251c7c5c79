//! Application configuration management.
//!
//! Configuration is read from environment variables once at startup.
//! Every variable is optional; a missing one falls back to its default, a
//! present but malformed one is an error.
//!
//! # Environment Variables
//!
//! - `SEQUENCE_NAME`: which sequence to print (default: `primes`)
//! - `SEQUENCE_LIMIT`: how many values to print, 1 to 10000 (default: 10)
//! - `SEQUENCE_START`: first candidate value, at most 10^9 (default: 1)

use std::env;
use std::str::FromStr;

use crate::error::SampleError;
use crate::pipelines::SequenceName;

/// Upper bound for `SEQUENCE_LIMIT`.
pub const MAX_LIMIT: usize = 10_000;

/// Upper bound for `SEQUENCE_START`; keeps `squares` inside `u64`.
pub const MAX_START: u64 = 1_000_000_000;

/// Validated application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// The sequence to print.
    pub name: SequenceName,
    /// Number of values to print.
    pub limit: usize,
    /// Value the sequence starts from.
    pub start: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: SequenceName::Primes,
            limit: 10,
            start: 1,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, SampleError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::UnknownSequence`] for an unknown
    /// `SEQUENCE_NAME` and [`SampleError::InvalidValue`] for a limit or start
    /// that does not parse or is out of range.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, SampleError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let name = lookup("SEQUENCE_NAME")
            .map_or(Ok(defaults.name), |value| value.parse::<SequenceName>())?;
        let limit = parse_optional(&lookup, "SEQUENCE_LIMIT", defaults.limit)?;
        let start = parse_optional(&lookup, "SEQUENCE_START", defaults.start)?;

        if limit == 0 || limit > MAX_LIMIT {
            return Err(SampleError::invalid_value(
                "SEQUENCE_LIMIT",
                format!("must be between 1 and {MAX_LIMIT}, got {limit}"),
            ));
        }

        if start > MAX_START {
            return Err(SampleError::invalid_value(
                "SEQUENCE_START",
                format!("must be at most {MAX_START}, got {start}"),
            ));
        }

        Ok(Self { name, limit, start })
    }
}

fn parse_optional<L, T>(lookup: &L, key: &str, default: T) -> Result<T, SampleError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr<Err = std::num::ParseIntError>,
{
    lookup(key).map_or(Ok(default), |value| {
        value.trim().parse().map_err(|error: std::num::ParseIntError| {
            SampleError::invalid_value(key, error.to_string())
        })
    })
}
