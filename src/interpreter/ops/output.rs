//! Printing opcodes: `pall`, `pint`, `pchar`, `pstr`
//!
//! Each writes newline-terminated lines to the interpreter's output and
//! leaves the container unchanged.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::MontyError;
use crate::memory::value::{as_ascii, as_string_char};
use std::io::Write;

impl<W: Write> Interpreter<W> {
    /// Print every value front to back, one per line
    pub(crate) fn op_pall(&mut self) {
        let values = self.stack.to_vec();
        for value in values {
            self.emit(format_args!("{value}\n"));
        }
    }

    pub(crate) fn op_pint(&mut self, line: usize) -> Result<(), MontyError> {
        let value = self.stack.peek_front(line)?;
        self.emit(format_args!("{value}\n"));
        Ok(())
    }

    pub(crate) fn op_pchar(&mut self, line: usize) -> Result<(), MontyError> {
        let value = self
            .stack
            .front()
            .ok_or(MontyError::EmptyStackOnString { line })?;
        let ch = as_ascii(value).ok_or(MontyError::ValueOutOfAsciiRange { line })?;
        self.emit(format_args!("{ch}\n"));
        Ok(())
    }

    /// Print characters from the front until a zero, an out-of-range value,
    /// or the end, then a newline
    pub(crate) fn op_pstr(&mut self) {
        let text: String = self.stack.iter().map_while(as_string_char).collect();
        self.emit(format_args!("{text}\n"));
    }
}
