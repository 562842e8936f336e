//! Decoded instructions.

use std::fmt;

use crate::OpCode;

/// One instruction with its operands.
///
/// `Display` renders assembler source that re-assembles to the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Halt,
    SymbolDefine { id: u8, value: u8 },
    SymbolApply { id: u8 },
    MetaReflect,
}

impl Instruction {
    /// Build an instruction from its opcode and operand bytes.
    ///
    /// Returns `None` if `operands` does not have exactly
    /// [`OpCode::operand_count`] bytes.
    pub fn from_parts(op: OpCode, operands: &[u8]) -> Option<Self> {
        match (op, operands) {
            (OpCode::Halt, []) => Some(Instruction::Halt),
            (OpCode::SymbolDefine, &[id, value]) => Some(Instruction::SymbolDefine { id, value }),
            (OpCode::SymbolApply, &[id]) => Some(Instruction::SymbolApply { id }),
            (OpCode::MetaReflect, []) => Some(Instruction::MetaReflect),
            _ => None,
        }
    }

    pub fn opcode(self) -> OpCode {
        match self {
            Instruction::Halt => OpCode::Halt,
            Instruction::SymbolDefine { .. } => OpCode::SymbolDefine,
            Instruction::SymbolApply { .. } => OpCode::SymbolApply,
            Instruction::MetaReflect => OpCode::MetaReflect,
        }
    }

    /// Size in bytes, opcode included.
    pub fn encoded_len(self) -> usize {
        1 + self.opcode().operand_count()
    }

    /// Append the encoded instruction to `out`.
    pub fn encode_into(self, out: &mut Vec<u8>) {
        out.push(self.opcode().as_u8());
        match self {
            Instruction::Halt | Instruction::MetaReflect => {}
            Instruction::SymbolDefine { id, value } => out.extend_from_slice(&[id, value]),
            Instruction::SymbolApply { id } => out.push(id),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();
        match *self {
            Instruction::Halt | Instruction::MetaReflect => write!(f, "{op}"),
            Instruction::SymbolDefine { id, value } => write!(f, "{op} 0x{id:02X}, {value}"),
            Instruction::SymbolApply { id } => write!(f, "{op} 0x{id:02X}"),
        }
    }
}
