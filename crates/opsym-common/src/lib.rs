//! Shared types for the opsym rewriter.
//!
//! Holds the fixed operator-spelling table consumed by the scanner and the
//! per-file error values reported by the file driver.

pub mod error;
pub mod ops;

pub use error::{FileError, FileErrorKind};
pub use ops::OperatorTable;
