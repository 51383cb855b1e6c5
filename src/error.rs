//! Error definitions for the construction and dispatch boundaries.
//!
//! Arithmetic never produces these: every word operation is total.

use crate::constants::WORD_BYTES;
use crate::opcode::Opcode;

#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("a word is imported from exactly {expected} bytes, got: {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("value does not fit in the target width")]
    Overflow,
    #[error("invalid numeric literal: {0}")]
    Parse(String),
    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),
    #[error("{opcode} takes {expected} operands, got: {actual}")]
    Arity {
        opcode: Opcode,
        expected: usize,
        actual: usize,
    },
}

impl WordError {
    pub(crate) fn invalid_length(actual: usize) -> Self {
        WordError::InvalidLength {
            expected: WORD_BYTES,
            actual,
        }
    }
}
