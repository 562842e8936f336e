//! Bytecode decoding and disassembly.

use std::fmt::Write;

use crate::{DecodeError, Instruction, OpCode};

/// Lazy decoder yielding `(offset, instruction)` pairs.
///
/// Stops after the first error.
pub struct Decoder<'a> {
    bytes: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Decoder {
            bytes,
            offset: 0,
            failed: false,
        }
    }

    fn decode_at(&self, offset: usize) -> Result<Instruction, DecodeError> {
        let byte = self.bytes[offset];
        let op = OpCode::from_u8(byte).ok_or(DecodeError::InvalidOpcode { byte, offset })?;
        let start = offset + 1;
        self.bytes
            .get(start..start + op.operand_count())
            .and_then(|operands| Instruction::from_parts(op, operands))
            .ok_or(DecodeError::Truncated {
                opcode: op.mnemonic(),
                offset,
            })
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<(usize, Instruction), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }
        let offset = self.offset;
        match self.decode_at(offset) {
            Ok(instruction) => {
                self.offset += instruction.encoded_len();
                Some(Ok((offset, instruction)))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Decode a whole program.
pub fn decode(bytes: &[u8]) -> Result<Vec<(usize, Instruction)>, DecodeError> {
    Decoder::new(bytes).collect()
}

/// Render a program as assembler source, one instruction per line.
pub fn disassemble(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut out = String::new();
    for item in Decoder::new(bytes) {
        let (_, instruction) = item?;
        let _ = writeln!(out, "{instruction}");
    }
    Ok(out)
}
