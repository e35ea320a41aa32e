// Instruction records produced by the line reader

/// One line of a Monty file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Opcode name as written in the file
    pub opcode: String,
    /// Raw token following the opcode, if any. Only `push` reads it.
    pub argument: Option<String>,
    /// 1-based source line
    pub line: usize,
}

impl Instruction {
    pub fn new(opcode: impl Into<String>, argument: Option<String>, line: usize) -> Self {
        Instruction {
            opcode: opcode.into(),
            argument,
            line,
        }
    }
}

/// A parsed Monty file: its instructions in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl IntoIterator for Program {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
