// Monty: bytecode interpreter for stack and queue programs

use std::io;
use std::process::ExitCode;

use monty::cli::Cli;
use monty::interpreter::engine::Interpreter;
use monty::interpreter::errors::{report, MontyError};
use monty::logging::init_logging;
use monty::parser::reader::load_program;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, &mut io::stderr().lock()),
    }
}

/// Parse arguments, load the file and execute it.
///
/// The interpreter is dropped before this returns, so the container is
/// released before any diagnostic is written.
fn run() -> Result<(), MontyError> {
    let cli = Cli::parse_args(std::env::args_os())?;
    let program = load_program(&cli.file)?;

    let mut interpreter = Interpreter::new(io::stdout().lock());
    interpreter.run(program)
}
