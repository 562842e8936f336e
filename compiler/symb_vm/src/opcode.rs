//! Opcode definitions for symbolic bytecode.

use std::fmt;

/// Instruction opcode, encoded as the first byte of each instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Stop execution.
    Halt = 0x05,
    /// Bind an identifier: `SYMBOL_DEFINE id, value`.
    SymbolDefine = 0xE0,
    /// Read an identifier: `SYMBOL_APPLY id`.
    SymbolApply = 0xE1,
    /// Announce a reflection and dump the table.
    MetaReflect = 0xE2,
}

impl OpCode {
    /// Every opcode, in encoding order.
    pub const ALL: [OpCode; 4] = [
        OpCode::Halt,
        OpCode::SymbolDefine,
        OpCode::SymbolApply,
        OpCode::MetaReflect,
    ];

    /// Get opcode from byte value.
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x05 => Some(OpCode::Halt),
            0xE0 => Some(OpCode::SymbolDefine),
            0xE1 => Some(OpCode::SymbolApply),
            0xE2 => Some(OpCode::MetaReflect),
            _ => None,
        }
    }

    /// Look up an opcode by assembler mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(mnemonic))
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Assembler spelling of this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Halt => "HALT",
            OpCode::SymbolDefine => "SYMBOL_DEFINE",
            OpCode::SymbolApply => "SYMBOL_APPLY",
            OpCode::MetaReflect => "META_REFLECT",
        }
    }

    /// Number of operand bytes following the opcode byte.
    pub fn operand_count(self) -> usize {
        match self {
            OpCode::Halt | OpCode::MetaReflect => 0,
            OpCode::SymbolApply => 1,
            OpCode::SymbolDefine => 2,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
