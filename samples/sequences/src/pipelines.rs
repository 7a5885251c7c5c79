//! The named sequences and the pipeline that renders them.
//!
//! Every sequence here is infinite or unbounded in principle; nothing is
//! computed until [`render`] bounds it with `take` and collects the prefix.

use std::fmt;
use std::str::FromStr;

use fpseq::for_;
use fpseq::iterator::{StatelessIterator, Unfold, operators};
use fpseq::pair::Pair;
use fpseq::pipe;

use crate::config::AppConfig;
use crate::error::SampleError;

/// The sequences the application knows how to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceName {
    /// `start, start + 1, ...`
    Naturals,
    /// Squares of the naturals from `start`.
    Squares,
    /// Primes not smaller than `start`.
    Primes,
    /// The Collatz trajectory of `start`, ending at 1.
    Collatz,
    /// Fizz buzz labels of the naturals from `start`.
    Fizzbuzz,
}

impl SequenceName {
    /// Every known sequence.
    pub const ALL: [Self; 5] = [
        Self::Naturals,
        Self::Squares,
        Self::Primes,
        Self::Collatz,
        Self::Fizzbuzz,
    ];

    /// The name used in `SEQUENCE_NAME`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naturals => "naturals",
            Self::Squares => "squares",
            Self::Primes => "primes",
            Self::Collatz => "collatz",
            Self::Fizzbuzz => "fizzbuzz",
        }
    }
}

impl fmt::Display for SequenceName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for SequenceName {
    type Err = SampleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| SampleError::UnknownSequence(value.to_string()))
    }
}

/// `start, start + 1, start + 2, ...`
#[must_use]
pub fn naturals(start: u64) -> StatelessIterator<u64> {
    StatelessIterator::count(start)
}

/// Squares of the naturals from `start`.
#[must_use]
pub fn squares(start: u64) -> StatelessIterator<u64> {
    for_! {
        value <= naturals(start);
        yield value.saturating_mul(value)
    }
}

/// Whether `value` is prime, by trial division up to its square root.
#[must_use]
pub fn is_prime(value: u64) -> bool {
    let divisors = usize::try_from(value.isqrt().saturating_sub(1)).unwrap_or(usize::MAX);
    value >= 2
        && !StatelessIterator::count(2_u64)
            .take(divisors)
            .any(|divisor| value % divisor == 0)
}

/// Primes not smaller than `start`.
#[must_use]
pub fn primes(start: u64) -> StatelessIterator<u64> {
    naturals(start.max(2)).filter(|value| is_prime(*value))
}

const fn collatz_step(value: u64) -> u64 {
    if value % 2 == 0 { value / 2 } else { 3 * value + 1 }
}

fn trajectory(value: u64) -> StatelessIterator<u64> {
    StatelessIterator::from_step(move || {
        let rest = if value == 1 {
            StatelessIterator::empty()
        } else {
            trajectory(collatz_step(value))
        };
        Some(Pair::new(rest, value))
    })
}

/// The Collatz trajectory of `start`, including `start` and the final 1.
///
/// # Errors
///
/// Returns [`SampleError::InvalidStart`] for a start of 0, which has no
/// trajectory.
pub fn collatz(start: u64) -> Result<StatelessIterator<u64>, SampleError> {
    if start == 0 {
        return Err(SampleError::InvalidStart {
            sequence: SequenceName::Collatz.to_string(),
            start,
        });
    }
    Ok(trajectory(start))
}

fn fizzbuzz_label(value: u64) -> String {
    match (value % 3, value % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => value.to_string(),
    }
}

/// Fizz buzz labels of the naturals from `start`.
#[must_use]
pub fn fizzbuzz(start: u64) -> StatelessIterator<String> {
    naturals(start).map(fizzbuzz_label)
}

/// The sequence called `name`, rendered as text.
///
/// # Errors
///
/// Returns [`SampleError::InvalidStart`] when `start` is outside the domain
/// of the sequence.
pub fn build(name: SequenceName, start: u64) -> Result<StatelessIterator<String>, SampleError> {
    let digits = |value: u64| value.to_string();
    let sequence = match name {
        SequenceName::Naturals => naturals(start).map(digits),
        SequenceName::Squares => squares(start).map(digits),
        SequenceName::Primes => primes(start).map(digits),
        SequenceName::Collatz => collatz(start)?.map(digits),
        SequenceName::Fizzbuzz => fizzbuzz(start),
    };
    Ok(sequence)
}

/// Builds the configured sequence and collects its first `limit` values.
///
/// # Errors
///
/// Propagates the errors of [`build`].
pub fn render(config: &AppConfig) -> Result<Vec<String>, SampleError> {
    tracing::debug!(sequence = %config.name, start = config.start, "building pipeline");

    let values = pipe!(
        build(config.name, config.start)?,
        operators::take(config.limit),
        operators::to_array
    );

    tracing::debug!(sequence = %config.name, count = values.len(), "pipeline evaluated");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("primes", SequenceName::Primes)]
    #[case(" FizzBuzz ", SequenceName::Fizzbuzz)]
    #[case("COLLATZ", SequenceName::Collatz)]
    fn test_sequence_name_parses_case_insensitively(
        #[case] input: &str,
        #[case] expected: SequenceName,
    ) {
        assert_eq!(input.parse::<SequenceName>(), Ok(expected));
    }

    #[rstest]
    fn test_sequence_name_round_trips_through_display() {
        for name in SequenceName::ALL {
            assert_eq!(name.to_string().parse::<SequenceName>(), Ok(name));
        }
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(9, false)]
    #[case(97, true)]
    fn test_is_prime(#[case] value: u64, #[case] expected: bool) {
        assert_eq!(is_prime(value), expected);
    }

    #[rstest]
    fn test_primes_from_start() {
        assert_eq!(primes(14).take(3).to_array(), vec![17, 19, 23]);
    }

    #[rstest]
    fn test_squares() {
        assert_eq!(squares(3).take(3).to_array(), vec![9, 16, 25]);
    }

    #[rstest]
    fn test_collatz_ends_at_one() {
        assert_eq!(collatz(6).unwrap().to_array(), vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
        assert_eq!(collatz(1).unwrap().to_array(), vec![1]);
    }

    #[rstest]
    fn test_collatz_rejects_zero() {
        assert!(matches!(collatz(0), Err(SampleError::InvalidStart { start: 0, .. })));
    }

    #[rstest]
    fn test_fizzbuzz_labels() {
        assert_eq!(
            fizzbuzz(9).take(7).to_array(),
            vec!["Fizz", "Buzz", "11", "Fizz", "13", "14", "FizzBuzz"]
        );
    }

    #[rstest]
    fn test_render_respects_the_limit() {
        let config = AppConfig {
            name: SequenceName::Naturals,
            limit: 4,
            start: 7,
        };
        assert_eq!(render(&config).unwrap(), vec!["7", "8", "9", "10"]);
    }

    #[rstest]
    fn test_render_of_finite_sequence_stops_early() {
        let config = AppConfig {
            name: SequenceName::Collatz,
            limit: 100,
            start: 4,
        };
        assert_eq!(render(&config).unwrap(), vec!["4", "2", "1"]);
    }
}
