//! Symb VM - symbolic bytecode for driving a [`SymbolTable`].
//!
//! Programs are flat byte sequences. Each instruction is one opcode byte
//! followed by its operand bytes:
//!
//! | Mnemonic        | Byte   | Operands  |
//! |-----------------|--------|-----------|
//! | `HALT`          | `0x05` |           |
//! | `SYMBOL_DEFINE` | `0xE0` | id, value |
//! | `SYMBOL_APPLY`  | `0xE1` | id        |
//! | `META_REFLECT`  | `0xE2` |           |
//!
//! # Pipeline
//!
//! - [`assemble`]: source text to bytes
//! - [`Decoder`] / [`disassemble`]: bytes back to instructions or text
//! - [`Machine::run`]: execute bytes against an owned table
//!
//! # Debugging
//!
//! Call [`init_tracing`] and set `RUST_LOG`, e.g. `RUST_LOG=symb_vm=trace`
//! to follow execution instruction by instruction, or
//! `RUST_LOG=symb_table::notice=info` to see table notices.

mod assembler;
mod decode;
mod error;
mod instruction;
mod machine;
mod opcode;

pub use assembler::{assemble, assemble_line};
pub use decode::{decode, disassemble, Decoder};
pub use error::{AssembleError, AssembleErrorKind, DecodeError, ExecError};
pub use instruction::Instruction;
pub use machine::{Machine, MachineBuilder, RunReport, UndefinedPolicy};
pub use opcode::OpCode;

pub use symb_table::{SharedNoticeHandler, Symbol, SymbolError, SymbolTable};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// leaves an already-installed global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
