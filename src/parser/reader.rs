//! Monty file reader
//!
//! This module turns a Monty file into a [`Program`]: one [`Instruction`] per
//! non-blank, non-comment line, each tagged with its 1-based line number.
//!
//! The reader does not validate opcodes or arguments. Unknown names and bad
//! `push` arguments are reported by the interpreter when the line executes,
//! so every instruction before a bad line still runs.

use crate::interpreter::errors::MontyError;
use crate::parser::ast::{Instruction, Program};
use crate::parser::lexer::tokenize_line;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build a program from source text
pub fn parse_program(source: &str) -> Program {
    let instructions = source
        .lines()
        .enumerate()
        .filter_map(|(index, text)| {
            tokenize_line(text).map(|tokens| {
                Instruction::new(
                    tokens.opcode,
                    tokens.argument.map(str::to_string),
                    index + 1,
                )
            })
        })
        .collect();

    Program { instructions }
}

/// Read and parse a Monty file
///
/// Any failure to read the file becomes [`MontyError::FileAccess`]. Bytes
/// that are not valid UTF-8 are replaced with U+FFFD rather than rejected,
/// and diagnostics echo the replaced text.
pub fn load_program(path: &Path) -> Result<Program, MontyError> {
    let bytes = fs::read(path).map_err(|err| {
        debug!(path = %path.display(), error = %err, "cannot read instruction file");
        MontyError::FileAccess {
            path: path.display().to_string(),
        }
    })?;

    let source = String::from_utf8_lossy(&bytes);
    let program = parse_program(&source);
    debug!(
        path = %path.display(),
        instructions = program.len(),
        "loaded instruction file"
    );
    Ok(program)
}
