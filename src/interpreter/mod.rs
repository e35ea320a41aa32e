//! Monty interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`engine::Interpreter`] and its instruction loop
//! - [`opcodes`]: the opcode catalogue and name lookup table
//! - [`ops`]: opcode implementations, as `impl Interpreter` blocks
//! - [`errors`]: the failure taxonomy and diagnostic reporter
//! - [`constants`]: fixed limits and defaults
//!
//! # Execution Model
//!
//! Instructions run one at a time in file order. The first failing
//! instruction halts the run: its error is returned, later instructions are
//! skipped, and everything earlier stays applied (including printed output).

pub mod constants;
pub mod engine;
pub mod errors;
pub mod opcodes;
pub mod ops;
