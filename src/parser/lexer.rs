//! Line tokenizer for Monty source
//!
//! A line is a run of whitespace-separated tokens. The first token is the
//! opcode and the second, when present, its argument; anything after that is
//! ignored. Blank lines and `#` comment lines produce no tokens.

use crate::interpreter::constants::COMMENT_PREFIX;
use crate::memory::value::Value;

/// Tokens of a single non-empty line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTokens<'a> {
    pub opcode: &'a str,
    pub argument: Option<&'a str>,
}

/// Split a line into its opcode and optional argument.
///
/// Returns `None` for blank and comment lines.
pub fn tokenize_line(line: &str) -> Option<LineTokens<'_>> {
    let mut tokens = line.split_whitespace();
    let opcode = tokens.next()?;
    if opcode.starts_with(COMMENT_PREFIX) {
        return None;
    }

    Some(LineTokens {
        opcode,
        argument: tokens.next(),
    })
}

/// Parse a `push` argument: an optional `-` followed by decimal digits.
///
/// Unlike `str::parse`, a leading `+` is rejected. Literals that do not fit a
/// [`Value`] are rejected as well.
pub fn parse_integer(token: &str) -> Option<Value> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
