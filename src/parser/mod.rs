//! Monty source reader
//!
//! This module turns the text of a Monty file into instruction records:
//! - [`lexer`]: splits a line into opcode and argument tokens
//! - [`reader`]: reads a file and numbers its instructions
//! - [`ast`]: the [`ast::Instruction`] and [`ast::Program`] records
//!
//! # File Format
//!
//! One instruction per line, tokens separated by whitespace:
//! ```text
//! push 1
//! push 2
//! # comments start with '#'
//! pall
//! ```
//! Blank lines and comment lines are skipped but still count towards the
//! line numbers used in diagnostics.

pub mod ast;
pub mod lexer;
pub mod reader;
