//! Opcode catalogue and name lookup
//!
//! [`Opcode`] is the fixed instruction set. Names are resolved through a
//! static [`FxHashMap`] built once from [`Opcode::ALL`], so adding an opcode
//! means adding a variant, its name, and a dispatch arm in the engine.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// The instructions a Monty file can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Push,
    Pall,
    Pint,
    Pop,
    Swap,
    Add,
    Sub,
    Div,
    Mul,
    Mod,
    Pchar,
    Pstr,
    Rotl,
    Rotr,
    Stack,
    Queue,
}

impl Opcode {
    pub const ALL: [Opcode; 16] = [
        Opcode::Push,
        Opcode::Pall,
        Opcode::Pint,
        Opcode::Pop,
        Opcode::Swap,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Div,
        Opcode::Mul,
        Opcode::Mod,
        Opcode::Pchar,
        Opcode::Pstr,
        Opcode::Rotl,
        Opcode::Rotr,
        Opcode::Stack,
        Opcode::Queue,
    ];

    /// Name as written in source files and diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Opcode::Push => "push",
            Opcode::Pall => "pall",
            Opcode::Pint => "pint",
            Opcode::Pop => "pop",
            Opcode::Swap => "swap",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Div => "div",
            Opcode::Mul => "mul",
            Opcode::Mod => "mod",
            Opcode::Pchar => "pchar",
            Opcode::Pstr => "pstr",
            Opcode::Rotl => "rotl",
            Opcode::Rotr => "rotr",
            Opcode::Stack => "stack",
            Opcode::Queue => "queue",
        }
    }

    /// Resolve an opcode name. Names are case-sensitive.
    pub fn lookup(name: &str) -> Option<Opcode> {
        opcode_table().get(name).copied()
    }

    /// Whether the opcode reads the instruction's argument token
    pub fn takes_argument(self) -> bool {
        matches!(self, Opcode::Push)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn opcode_table() -> &'static FxHashMap<&'static str, Opcode> {
    static TABLE: OnceLock<FxHashMap<&'static str, Opcode>> = OnceLock::new();
    TABLE.get_or_init(|| Opcode::ALL.iter().map(|op| (op.name(), *op)).collect())
}
