// Opcode implementations, split by concern as `impl Interpreter` blocks

pub mod binary;
pub mod output;
pub mod stack_ops;
