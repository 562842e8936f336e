//! Errors raised by symbol table operations.

/// Recoverable failure of a symbol table lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    /// The identifier has no current binding.
    #[error("undefined symbol 0x{id:02X}")]
    NotDefined { id: u8 },
}

impl SymbolError {
    /// The identifier the failed operation referred to.
    pub fn id(self) -> u8 {
        match self {
            SymbolError::NotDefined { id } => id,
        }
    }
}
