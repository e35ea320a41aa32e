//! Container-manipulating opcodes: `push`, `pop`, `swap`, `stack`, `queue`
//!
//! `rotl` and `rotr` never fail and map straight onto
//! [`crate::memory::stack::Stack`] rotations, so the engine dispatches them
//! without a wrapper here.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::MontyError;
use crate::interpreter::opcodes::Opcode;
use crate::memory::stack::Mode;
use crate::parser::lexer::parse_integer;
use std::io::Write;
use tracing::debug;

impl<W: Write> Interpreter<W> {
    pub(crate) fn op_push(
        &mut self,
        argument: Option<&str>,
        line: usize,
    ) -> Result<(), MontyError> {
        let value = argument
            .and_then(parse_integer)
            .ok_or(MontyError::PushMissingArgument { line })?;
        self.stack.push(value)
    }

    pub(crate) fn op_pop(&mut self, line: usize) -> Result<(), MontyError> {
        self.stack.pop_front(line).map(|_| ())
    }

    pub(crate) fn op_swap(&mut self, line: usize) -> Result<(), MontyError> {
        if self.stack.swap_front() {
            Ok(())
        } else {
            Err(MontyError::StackTooShort {
                line,
                opcode: Opcode::Swap.name(),
            })
        }
    }

    pub(crate) fn op_set_mode(&mut self, mode: Mode) {
        if self.stack.mode() != mode {
            debug!(line = self.current_line(), %mode, "switching mode");
        }
        self.stack.set_mode(mode);
    }
}
