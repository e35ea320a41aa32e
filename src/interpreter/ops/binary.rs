use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::MontyError;
use crate::interpreter::opcodes::Opcode;
use crate::memory::value::Value;
use std::io::Write;

/// The two-operand arithmetic opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    pub fn opcode(self) -> Opcode {
        match self {
            ArithOp::Add => Opcode::Add,
            ArithOp::Sub => Opcode::Sub,
            ArithOp::Mul => Opcode::Mul,
            ArithOp::Div => Opcode::Div,
            ArithOp::Mod => Opcode::Mod,
        }
    }

    /// Compute `second op front`.
    ///
    /// Returns `None` for a zero divisor. Overflow wraps, including
    /// `i32::MIN / -1`.
    pub fn apply(self, second: Value, front: Value) -> Option<Value> {
        match self {
            ArithOp::Add => Some(second.wrapping_add(front)),
            ArithOp::Sub => Some(second.wrapping_sub(front)),
            ArithOp::Mul => Some(second.wrapping_mul(front)),
            ArithOp::Div | ArithOp::Mod if front == 0 => None,
            ArithOp::Div => Some(second.wrapping_div(front)),
            ArithOp::Mod => Some(second.wrapping_rem(front)),
        }
    }
}

impl<W: Write> Interpreter<W> {
    /// `add`, `sub`, `mul`, `div`, `mod`
    ///
    /// With `a` at the front and `b` behind it, both are replaced by `b op a`
    /// at the front. Depth is checked before the divisor, and nothing is
    /// modified when either check fails.
    pub(crate) fn op_arithmetic(&mut self, op: ArithOp, line: usize) -> Result<(), MontyError> {
        let too_short = || MontyError::StackTooShort {
            line,
            opcode: op.opcode().name(),
        };

        let mut values = self.stack.iter();
        let (Some(front), Some(second)) = (values.next(), values.next()) else {
            return Err(too_short());
        };

        let result = op
            .apply(second, front)
            .ok_or(MontyError::DivisionByZero { line })?;

        self.stack.take_front();
        let slot = self.stack.front_mut().ok_or_else(too_short)?;
        *slot = result;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_order() {
        // second-from-front op front
        assert_eq!(ArithOp::Sub.apply(10, 3), Some(7));
        assert_eq!(ArithOp::Div.apply(10, 3), Some(3));
        assert_eq!(ArithOp::Mod.apply(10, 3), Some(1));
        assert_eq!(ArithOp::Add.apply(10, 3), Some(13));
        assert_eq!(ArithOp::Mul.apply(10, 3), Some(30));
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(ArithOp::Div.apply(-7, 2), Some(-3));
        assert_eq!(ArithOp::Mod.apply(-7, 2), Some(-1));
        assert_eq!(ArithOp::Mod.apply(7, -2), Some(1));
    }

    #[test]
    fn test_zero_divisor() {
        assert_eq!(ArithOp::Div.apply(10, 0), None);
        assert_eq!(ArithOp::Mod.apply(10, 0), None);
        assert_eq!(ArithOp::Div.apply(0, 5), Some(0));
        assert_eq!(ArithOp::Mul.apply(10, 0), Some(0));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(ArithOp::Add.apply(i32::MAX, 1), Some(i32::MIN));
        assert_eq!(ArithOp::Div.apply(i32::MIN, -1), Some(i32::MIN));
        assert_eq!(ArithOp::Mod.apply(i32::MIN, -1), Some(0));
    }

    #[test]
    fn test_opcode_names() {
        let ops = [
            ArithOp::Add,
            ArithOp::Sub,
            ArithOp::Mul,
            ArithOp::Div,
            ArithOp::Mod,
        ];
        let names: Vec<_> = ops
            .iter()
            .map(|op| op.opcode().name())
            .collect();
        assert_eq!(names, ["add", "sub", "mul", "div", "mod"]);
    }
}
