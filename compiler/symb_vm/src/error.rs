//! Errors for assembling, decoding and running symbolic bytecode.

use symb_table::SymbolError;

/// Assembly failure, located by 1-based source line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct AssembleError {
    pub line: usize,
    pub kind: AssembleErrorKind,
}

/// What went wrong on an assembler line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssembleErrorKind {
    #[error("unknown opcode: {0}")]
    UnknownOpcode(String),
    #[error("unknown operand: {0}")]
    MalformedOperand(String),
    #[error("operand does not fit in a byte: {0}")]
    OperandOutOfRange(String),
    #[error("{opcode} takes {expected} operand(s), found {found}")]
    OperandCount {
        opcode: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Malformed bytecode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid opcode 0x{byte:02X} at offset {offset}")]
    InvalidOpcode { byte: u8, offset: usize },
    #[error("truncated {opcode} instruction at offset {offset}")]
    Truncated { opcode: &'static str, offset: usize },
}

/// Failure while running a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// Only raised under [`crate::UndefinedPolicy::Abort`].
    #[error("{source} at offset {offset}")]
    Undefined { offset: usize, source: SymbolError },
}
