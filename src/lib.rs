//! # Introduction
//!
//! Monty executes Monty bytecode files: plain text, one opcode per line,
//! operating on a single container of integers that behaves as a stack or,
//! after the `queue` opcode, as a queue.
//!
//! ## Execution pipeline
//!
//! ```text
//! File → Reader → Instructions → Interpreter → Container / Output
//! ```
//!
//! 1. [`parser`]: reads the file and produces numbered
//!    [`parser::ast::Instruction`]s.
//! 2. [`interpreter`]: looks up each opcode and executes it, stopping at the
//!    first [`interpreter::errors::MontyError`].
//! 3. [`memory`]: the container, a doubly-linked
//!    [`memory::stack::Stack`] of [`memory::value::Value`]s.
//! 4. [`cli`] and [`logging`]: command-line parsing and `tracing` setup for
//!    the `monty` binary.
//!
//! ## Opcodes
//!
//! Stack: `push n`, `pop`, `swap`, `rotl`, `rotr`.
//! Arithmetic: `add`, `sub`, `mul`, `div`, `mod`.
//! Output: `pall`, `pint`, `pchar`, `pstr`.
//! Mode: `stack`, `queue`.

pub mod cli;
pub mod interpreter;
pub mod logging;
pub mod memory;
pub mod parser;
