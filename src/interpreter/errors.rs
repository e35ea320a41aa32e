//! Error types and diagnostic reporting for the Monty interpreter
//!
//! This module defines [`MontyError`], which covers every way a run can fail:
//! command-line misuse, an unreadable file, and the runtime failures raised by
//! individual opcodes. The `Display` output of each variant is the exact
//! diagnostic line written to stderr.
//!
//! All errors are fatal - there is no recovery. [`report`] writes the
//! diagnostic and yields the failure exit code; by the time it runs the
//! interpreter, and with it the container, has already been dropped.

use super::constants::EXIT_FAILURE;
use std::io::Write;
use std::process::ExitCode;

/// Every failure kind a run can end with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MontyError {
    /// Wrong number of command-line arguments
    #[error("USAGE: monty file")]
    Usage,

    /// The instruction file could not be opened or read
    #[error("Error: Can't open file {path}")]
    FileAccess { path: String },

    /// Opcode name not in the opcode table
    #[error("L{line}: unknown instruction {name}")]
    UnknownInstruction { line: usize, name: String },

    /// A new cell could not be allocated
    #[error("Error: malloc failed")]
    AllocationFailure,

    /// `push` without a valid integer argument
    #[error("L{line}: usage: push integer")]
    PushMissingArgument { line: usize },

    /// `pint` on an empty container
    #[error("L{line}: can't pint, stack empty")]
    EmptyStackOnPrint { line: usize },

    /// `pop` on an empty container
    #[error("L{line}: can't pop an empty stack")]
    EmptyStackOnPop { line: usize },

    /// An opcode needing two values found fewer
    #[error("L{line}: can't {opcode}, stack too short")]
    StackTooShort { line: usize, opcode: &'static str },

    /// `div` or `mod` with a zero divisor
    #[error("L{line}: division by zero")]
    DivisionByZero { line: usize },

    /// `pchar` on a value outside 0..=127
    #[error("L{line}: can't pchar, value out of range")]
    ValueOutOfAsciiRange { line: usize },

    /// `pchar` on an empty container
    #[error("L{line}: can't pchar, stack empty")]
    EmptyStackOnString { line: usize },
}

impl MontyError {
    /// Source line the error refers to, for errors raised by an instruction
    pub fn line(&self) -> Option<usize> {
        match self {
            MontyError::UnknownInstruction { line, .. } => Some(*line),
            MontyError::PushMissingArgument { line } => Some(*line),
            MontyError::EmptyStackOnPrint { line } => Some(*line),
            MontyError::EmptyStackOnPop { line } => Some(*line),
            MontyError::StackTooShort { line, .. } => Some(*line),
            MontyError::DivisionByZero { line } => Some(*line),
            MontyError::ValueOutOfAsciiRange { line } => Some(*line),
            MontyError::EmptyStackOnString { line } => Some(*line),
            MontyError::Usage => None,
            MontyError::FileAccess { .. } => None,
            MontyError::AllocationFailure => None,
        }
    }

    /// Process exit status for this error
    pub fn exit_status(&self) -> u8 {
        EXIT_FAILURE
    }
}

/// Write the diagnostic line for `error` and return the failure exit code
pub fn report<W: Write>(error: &MontyError, stderr: &mut W) -> ExitCode {
    // Nothing useful can be done if stderr itself is gone
    let _ = writeln!(stderr, "{error}");
    let _ = stderr.flush();
    ExitCode::from(error.exit_status())
}
