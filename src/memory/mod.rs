//! Memory model for the Monty interpreter
//!
//! This module provides the data the interpreter operates on:
//! - [`value`]: the integer [`value::Value`] held by each cell
//! - [`stack`]: the container, a doubly-linked sequence of cells with a
//!   switchable [`stack::Mode`]
//!
//! There is exactly one container per run. It is owned by the
//! [`crate::interpreter::engine::Interpreter`] and released when the
//! interpreter is dropped, whichever way execution ends.

pub mod stack;
pub mod value;
