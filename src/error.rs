//! Errors reported by the symbol table.

use thiserror::Error;

/// The error type for symbol table operations.
///
/// Operations that look up a key that may or may not be present (`get`,
/// `delete`) signal absence with `Option` instead; an `Error` is reserved
/// for calls that are only meaningful on a non-empty table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation requires at least one entry but the table was empty.
    #[error("operation requires a non-empty symbol table")]
    EmptyTree,
}
