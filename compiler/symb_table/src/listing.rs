//! Text rendering of defined symbols.

use std::fmt::Write;

use crate::Symbol;

/// First line of every rendered listing.
pub const LISTING_HEADER: &str = "[Symbolic] Current Symbol Table:";

/// Render symbols as a listing: the header, then one indented line per symbol.
///
/// Symbols are rendered in the order given; [`crate::SymbolTable::symbols`]
/// already yields them in ascending identifier order.
pub fn render_listing(symbols: impl IntoIterator<Item = Symbol>) -> String {
    let mut out = String::from(LISTING_HEADER);
    for symbol in symbols {
        let _ = write!(out, "\n  {symbol}");
    }
    out
}
