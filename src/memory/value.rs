//! Runtime value representation
//!
//! Every cell of the container holds a [`Value`], a 32-bit signed integer
//! (the width of a C `int`). Arithmetic on values wraps on overflow.
//!
//! `pchar` and `pstr` reinterpret values as ASCII code points; the helpers
//! here decide which values are printable for each of them.

use crate::interpreter::constants::{ASCII_MAX, ASCII_MIN};

/// Runtime value held by a container cell
pub type Value = i32;

/// Character for `pchar`: any value in `ASCII_MIN..=ASCII_MAX`
pub fn as_ascii(value: Value) -> Option<char> {
    if (ASCII_MIN..=ASCII_MAX).contains(&value) {
        u8::try_from(value).ok().map(char::from)
    } else {
        None
    }
}

/// Character for `pstr`, which stops at zero as well as out-of-range values
pub fn as_string_char(value: Value) -> Option<char> {
    if value == 0 {
        None
    } else {
        as_ascii(value)
    }
}
