//! Error handling module for moodgen.
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! [`MoodgenError`] wraps the more specific kinds:
//! - I/O failures while creating the output directory or writing the file
//! - Schema violations found while validating mood records
//! - Configuration and record-file problems
//!
//! # Example
//!
//! ```rust,no_run
//! use moodgen::error::{Result, ValidationError};
//!
//! fn require_records(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(ValidationError::NoRecords.into());
//!     }
//!     Ok(())
//! }
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, MoodgenError, Result, ValidationError};
