// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod candidate;
pub mod config;
pub mod core;
pub mod error;
pub mod normalize;
pub mod record;
pub mod render;
pub mod sources;

pub mod csv;
pub mod file;
pub mod progress;
pub mod runner;
pub mod wiki;

#[cfg(feature = "cli")]
pub mod cli;

pub use candidate::{Candidate, Office, make_candidate};
pub use error::{CandidateError, SourceError};
pub use record::RawRecord;
