//! # Newsdesk Common
//!
//! Shared types, utilities, and common functionality for the newsdesk
//! analytics workspace.
//!
//! This crate provides the foundational error type, the category [`Key`]
//! scalar, the publishing [`WorkflowState`] set and the logging setup used by
//! every other crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{NewsdeskError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::*;
pub use utils::*;
