//! Sequences Sample Application
//!
//! Prints a bounded prefix of a named, infinite, lazily evaluated sequence
//! built with the fpseq library.
//!
//! # Modules
//!
//! - [`config`]: `AppConfig` loaded and validated from environment variables
//! - [`error`]: the application's error type
//! - [`pipelines`]: the named sequences and the rendering pipeline
//!
//! # fpseq Features Used
//!
//! - `StatelessIterator` constructors (`count`, `from_step`) and combinators
//!   (`map`, `filter`, `take`, `any`)
//! - `pipe!` with the curried `operators`
//! - `Unfold` for a hand-written step function (the Collatz trajectory)

pub mod config;
pub mod error;
pub mod pipelines;

pub use config::AppConfig;
pub use error::SampleError;
pub use pipelines::SequenceName;
