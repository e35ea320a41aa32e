//! Command-line interface for the `monty` binary

use crate::interpreter::errors::MontyError;
use clap::Parser;
use std::ffi::OsString;
use std::iter;
use std::path::PathBuf;

/// End-of-options marker, inserted ahead of the user's arguments
const END_OF_OPTIONS: &str = "--";

/// Raw positional arguments as clap collects them
#[derive(Debug, Parser)]
#[command(name = "monty", disable_help_flag = true, disable_version_flag = true)]
struct RawArgs {
    #[arg(value_parser = clap::value_parser!(OsString))]
    files: Vec<OsString>,
}

/// `monty file`
///
/// Every argument is taken as an ordinary value, so `--`, `--help` and the
/// empty string are all file names. Anything other than exactly one of them
/// is a usage error.
#[derive(Debug)]
pub struct Cli {
    /// Monty bytecode file to execute
    pub file: PathBuf,
}

impl Cli {
    /// Parse arguments (including the program name) into a [`Cli`]
    pub fn parse_args<I, T>(args: I) -> Result<Self, MontyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program_name = args.next().unwrap_or_else(|| OsString::from("monty"));

        // clap stops option parsing after the first `--`, so any `--` the user
        // passed is left as a plain value.
        let argv = iter::once(program_name)
            .chain(iter::once(OsString::from(END_OF_OPTIONS)))
            .chain(args);

        let mut raw = RawArgs::try_parse_from(argv).map_err(|_| MontyError::Usage)?;
        match (raw.files.pop(), raw.files.is_empty()) {
            (Some(file), true) => Ok(Cli {
                file: PathBuf::from(file),
            }),
            _ => Err(MontyError::Usage),
        }
    }
}
