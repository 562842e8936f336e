//! Symb Table - fixed-capacity symbol table keyed by 8-bit identifiers.
//!
//! The table holds one slot per identifier (`0x00..=0xFF`). Each slot carries
//! an explicit defined flag, so identifier `0` and value `0` are ordinary
//! bindings rather than "unbound" markers.
//!
//! # Operations
//!
//! - [`SymbolTable::initialize`]: clear every slot
//! - [`SymbolTable::define`]: bind an identifier, overwriting any prior value
//! - [`SymbolTable::apply`]: read a binding, failing with [`SymbolError`]
//! - [`SymbolTable::symbols`]: enumerate defined entries in identifier order
//! - [`SymbolTable::reflect`]: enumerate and render for inspection
//!
//! # Notices
//!
//! Every operation reports a human-readable notice through a
//! [`SharedNoticeHandler`]. The default handler forwards notices to `tracing`;
//! tests usually install [`buffer_handler`] and assert on the captured text.

mod error;
mod listing;
mod notice;
mod table;

pub use error::SymbolError;
pub use listing::{render_listing, LISTING_HEADER};
pub use notice::{
    buffer_handler, silent_handler, stdout_handler, tracing_handler, BufferNoticeHandler,
    NoticeHandlerImpl, SharedNoticeHandler, StdoutNoticeHandler, TracingNoticeHandler,
};
pub use table::{Symbol, SymbolTable, MAX_SYMBOLS};
