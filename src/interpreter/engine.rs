// Execution engine for the Monty interpreter

use crate::interpreter::errors::MontyError;
use crate::interpreter::opcodes::Opcode;
use crate::interpreter::ops::binary::ArithOp;
use crate::memory::stack::{Mode, Stack};
use crate::parser::ast::Instruction;
use std::borrow::Borrow;
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

/// Where the interpreter is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// Accepting instructions
    Running,
    /// Reached end of input without error; later instructions are ignored
    Finished,
    /// Stopped by an error; later instructions are ignored
    Failed,
}

/// Settings applied when an interpreter is created
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpreterConfig {
    /// Addressing mode before any `stack`/`queue` opcode runs
    pub initial_mode: Mode,
}

/// The Monty interpreter: one container plus the output stream opcodes print to
pub struct Interpreter<W: Write> {
    /// The container every opcode operates on
    pub(crate) stack: Stack,

    /// Destination for `pall`, `pint`, `pchar` and `pstr`
    pub(crate) output: W,

    /// Line of the instruction being executed
    current_line: usize,

    state: ExecutionState,

    /// Number of instructions executed successfully
    executed: usize,
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter in stack mode writing to `output`
    pub fn new(output: W) -> Self {
        Self::with_config(output, InterpreterConfig::default())
    }

    pub fn with_config(output: W, config: InterpreterConfig) -> Self {
        Interpreter {
            stack: Stack::with_mode(config.initial_mode),
            output,
            current_line: 0,
            state: ExecutionState::Running,
            executed: 0,
        }
    }

    /// Execute instructions in order until input ends or one fails
    ///
    /// On failure the remaining instructions are not executed and the error is
    /// returned. Effects of instructions that already ran are kept. Output is
    /// flushed on both paths.
    pub fn run<I>(&mut self, program: I) -> Result<(), MontyError>
    where
        I: IntoIterator,
        I::Item: Borrow<Instruction>,
    {
        for instruction in program {
            let instruction = <I::Item as Borrow<Instruction>>::borrow(&instruction);
            if let Err(err) = self.step(instruction) {
                self.flush_output();
                return Err(err);
            }
        }

        if self.state == ExecutionState::Running {
            self.state = ExecutionState::Finished;
        }
        self.flush_output();
        debug!(executed = self.executed, "execution finished");
        Ok(())
    }

    /// Execute a single instruction
    ///
    /// Once the interpreter has halted, successfully or not, further
    /// instructions are ignored.
    pub fn step(&mut self, instruction: &Instruction) -> Result<(), MontyError> {
        if self.is_halted() {
            return Ok(());
        }

        self.current_line = instruction.line;
        match self.execute_instruction(instruction) {
            Ok(()) => {
                self.executed += 1;
                Ok(())
            }
            Err(err) => {
                debug!(line = self.current_line, error = %err, "execution halted");
                self.state = ExecutionState::Failed;
                Err(err)
            }
        }
    }

    /// Look up the opcode and dispatch to its implementation
    fn execute_instruction(&mut self, instruction: &Instruction) -> Result<(), MontyError> {
        let line = instruction.line;
        let opcode = Opcode::lookup(&instruction.opcode).ok_or_else(|| {
            MontyError::UnknownInstruction {
                line,
                name: instruction.opcode.clone(),
            }
        })?;

        let argument = if opcode.takes_argument() {
            instruction.argument.as_deref()
        } else {
            None
        };
        trace!(line, %opcode, argument, depth = self.stack.len(), "dispatch");

        match opcode {
            Opcode::Push => self.op_push(argument, line),
            Opcode::Pall => {
                self.op_pall();
                Ok(())
            }
            Opcode::Pint => self.op_pint(line),
            Opcode::Pop => self.op_pop(line),
            Opcode::Swap => self.op_swap(line),
            Opcode::Add => self.op_arithmetic(ArithOp::Add, line),
            Opcode::Sub => self.op_arithmetic(ArithOp::Sub, line),
            Opcode::Div => self.op_arithmetic(ArithOp::Div, line),
            Opcode::Mul => self.op_arithmetic(ArithOp::Mul, line),
            Opcode::Mod => self.op_arithmetic(ArithOp::Mod, line),
            Opcode::Pchar => self.op_pchar(line),
            Opcode::Pstr => {
                self.op_pstr();
                Ok(())
            }
            Opcode::Rotl => {
                self.stack.rotate_left();
                Ok(())
            }
            Opcode::Rotr => {
                self.stack.rotate_right();
                Ok(())
            }
            Opcode::Stack => {
                self.op_set_mode(Mode::Stack);
                Ok(())
            }
            Opcode::Queue => {
                self.op_set_mode(Mode::Queue);
                Ok(())
            }
        }
    }

    /// Write program output. Write failures on stdout are not diagnosed.
    pub(crate) fn emit(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
    }

    fn flush_output(&mut self) {
        let _ = self.output.flush();
    }

    /// Get the container
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Current addressing mode
    pub fn mode(&self) -> Mode {
        self.stack.mode()
    }

    pub fn state(&self) -> ExecutionState {
        self.state
    }

    /// Check if execution has stopped, successfully or not
    pub fn is_halted(&self) -> bool {
        self.state != ExecutionState::Running
    }

    /// Line of the most recently executed instruction (0 before any)
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn instructions_executed(&self) -> usize {
        self.executed
    }

    /// Get the output stream
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Release the container and hand back the output stream
    pub fn into_output(self) -> W {
        let Interpreter {
            mut stack, output, ..
        } = self;
        stack.release_all();
        output
    }
}
