//! Text assembler for symbolic bytecode.
//!
//! Source is line-oriented: one instruction per line, mnemonic first, then
//! operands separated by whitespace. Trailing commas on operands are ignored,
//! so `SYMBOL_DEFINE 0x01, 100` and `symbol_define 1 100` are equivalent.
//! Blank lines and lines starting with `//` or `#` are skipped.

use crate::{AssembleError, AssembleErrorKind, Instruction, OpCode};

/// Assemble a whole program.
#[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
pub fn assemble(source: &str) -> Result<Vec<u8>, AssembleError> {
    let mut program = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        let line = idx + 1;
        if let Some(instruction) =
            assemble_line(text).map_err(|kind| AssembleError { line, kind })?
        {
            instruction.encode_into(&mut program);
        }
    }
    tracing::debug!(bytes = program.len(), "assembled program");
    Ok(program)
}

/// Assemble a single source line.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn assemble_line(text: &str) -> Result<Option<Instruction>, AssembleErrorKind> {
    let text = text.trim();
    if text.is_empty() || text.starts_with("//") || text.starts_with('#') {
        return Ok(None);
    }

    let mut parts = text.split_whitespace();
    let Some(mnemonic) = parts.next() else {
        return Ok(None);
    };
    let op = OpCode::from_mnemonic(mnemonic)
        .ok_or_else(|| AssembleErrorKind::UnknownOpcode(mnemonic.to_ascii_uppercase()))?;

    let operands = parts.map(parse_operand).collect::<Result<Vec<u8>, _>>()?;
    Instruction::from_parts(op, &operands)
        .map(Some)
        .ok_or(AssembleErrorKind::OperandCount {
            opcode: op.mnemonic(),
            expected: op.operand_count(),
            found: operands.len(),
        })
}

/// Parse a byte operand: `0x`-prefixed hexadecimal or plain decimal.
fn parse_operand(token: &str) -> Result<u8, AssembleErrorKind> {
    let raw = token.trim_end_matches(',');
    let (digits, radix) = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (raw, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(AssembleErrorKind::MalformedOperand(raw.to_owned()));
    }
    // Digits are validated above, so overflow is the only remaining failure.
    u8::from_str_radix(digits, radix)
        .map_err(|_| AssembleErrorKind::OperandOutOfRange(raw.to_owned()))
}
