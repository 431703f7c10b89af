//! Error types and error handling for the tokenizer.
//!
//! This module defines the errors a tokenizer run can produce. It includes:
//!
//! - An error structure carrying the source offset it refers to
//! - Specific error variants for each way a lexeme can fail
//! - The split between fatal errors and recoverable warnings
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
