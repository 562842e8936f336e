//! The symbol table proper.
//!
//! One slot per 8-bit identifier, allocated inline. Slots are only ever
//! overwritten in place; nothing is removed or compacted until the next
//! [`SymbolTable::initialize`].

use std::fmt;

use crate::listing::render_listing;
use crate::notice::{tracing_handler, SharedNoticeHandler};
use crate::SymbolError;

/// Number of slots in a table, one per identifier.
pub const MAX_SYMBOLS: usize = 256;

/// Storage for a single identifier.
///
/// `defined` is the only presence marker; `value` is never inspected to
/// decide whether a slot is bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    defined: bool,
    value: u8,
}

const UNBOUND: Slot = Slot {
    defined: false,
    value: 0,
};

/// A defined `(id, value)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub id: u8,
    pub value: u8,
}

impl Symbol {
    pub const fn new(id: u8, value: u8) -> Self {
        Symbol { id, value }
    }
}

impl From<Symbol> for (u8, u8) {
    fn from(symbol: Symbol) -> Self {
        (symbol.id, symbol.value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol 0x{:02X} = {}", self.id, self.value)
    }
}

/// Fixed-capacity table mapping 8-bit identifiers to 8-bit values.
///
/// The table is an owned value: callers create one, pass it to whatever needs
/// it, and reset it with [`initialize`](Self::initialize). There is no global
/// instance.
///
/// # Thread Safety
/// Operations take `&self`/`&mut self` and run to completion. Sharing a table
/// across threads requires wrapping it in a lock so that a define and a
/// following apply are observed together.
#[derive(Clone)]
pub struct SymbolTable {
    slots: [Slot; MAX_SYMBOLS],
    notices: SharedNoticeHandler,
}

impl SymbolTable {
    /// Create an initialized table reporting notices to `tracing`.
    pub fn new() -> Self {
        Self::with_notices(tracing_handler())
    }

    /// Create an initialized table reporting notices to `notices`.
    pub fn with_notices(notices: SharedNoticeHandler) -> Self {
        let mut table = SymbolTable {
            slots: [UNBOUND; MAX_SYMBOLS],
            notices,
        };
        table.initialize();
        table
    }

    /// Reset every slot to unbound.
    ///
    /// Safe to call any number of times; each call discards all prior
    /// definitions.
    pub fn initialize(&mut self) {
        self.slots = [UNBOUND; MAX_SYMBOLS];
        self.notices.notice("[Symbolic] Symbolic table initialized.");
    }

    /// The handler receiving this table's notices.
    pub fn notices(&self) -> &SharedNoticeHandler {
        &self.notices
    }

    /// Replace the notice handler. Existing bindings are kept.
    pub fn set_notices(&mut self, notices: SharedNoticeHandler) {
        self.notices = notices;
    }

    /// Bind `id` to `value`, overwriting any previous binding.
    pub fn define(&mut self, id: u8, value: u8) {
        self.slots[usize::from(id)] = Slot {
            defined: true,
            value,
        };
        self.notices
            .notice(&format!("[Symbolic] Defined symbol 0x{id:02X} = {value}"));
    }

    /// Read the value bound to `id`.
    ///
    /// An unbound identifier is reported as a notice and returned as
    /// [`SymbolError::NotDefined`]; the caller decides how to proceed.
    pub fn apply(&self, id: u8) -> Result<u8, SymbolError> {
        match self.get(id) {
            Some(value) => {
                self.notices
                    .notice(&format!("[Symbolic] Applied symbol 0x{id:02X} = {value}"));
                Ok(value)
            }
            None => {
                self.notices
                    .notice(&format!("[Symbolic] Undefined symbol 0x{id:02X}"));
                Err(SymbolError::NotDefined { id })
            }
        }
    }

    /// Read the value bound to `id` without emitting a notice.
    #[inline]
    pub fn get(&self, id: u8) -> Option<u8> {
        let slot = self.slots[usize::from(id)];
        slot.defined.then_some(slot.value)
    }

    /// Returns `true` if `id` currently has a binding.
    #[inline]
    pub fn is_defined(&self, id: u8) -> bool {
        self.slots[usize::from(id)].defined
    }

    /// Number of defined identifiers.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.defined).count()
    }

    /// Returns `true` if no identifier is defined.
    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(|slot| slot.defined)
    }

    /// Defined symbols in ascending identifier order.
    ///
    /// Read-only; call again to restart the enumeration.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.slots
            .iter()
            .zip(0..=u8::MAX)
            .filter(|(slot, _)| slot.defined)
            .map(|(slot, id)| Symbol::new(id, slot.value))
    }

    /// Render the defined symbols as a listing without emitting a notice.
    pub fn listing(&self) -> String {
        render_listing(self.symbols())
    }

    /// Emit the listing as a notice and return it.
    pub fn dump(&self) -> String {
        let listing = self.listing();
        self.notices.notice(&listing);
        listing
    }

    /// Reflection hook: announce the reflection, then dump the table.
    pub fn reflect(&self) -> String {
        self.notices.notice("[Meta] Reflection triggered.");
        self.dump()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.listing())
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("symbols", &self.symbols().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
