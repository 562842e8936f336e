use super::*;
use crate::notice::{buffer_handler, silent_handler};
use pretty_assertions::assert_eq;

fn quiet_table() -> SymbolTable {
    SymbolTable::with_notices(silent_handler())
}

fn symbols_of(table: &SymbolTable) -> Vec<(u8, u8)> {
    table.symbols().map(Into::into).collect()
}

// === Define / Apply ===

#[test]
fn test_define_then_apply() {
    let mut table = quiet_table();
    table.define(0x2A, 7);
    assert_eq!(table.apply(0x2A), Ok(7));
}

#[test]
fn test_apply_undefined_is_error() {
    let table = quiet_table();
    assert_eq!(table.apply(3), Err(SymbolError::NotDefined { id: 3 }));
}

#[test]
fn test_redefine_last_write_wins() {
    let mut table = quiet_table();
    table.define(9, 1);
    table.define(9, 2);
    assert_eq!(table.apply(9), Ok(2));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_zero_id_and_zero_value_are_real_bindings() {
    let mut table = quiet_table();
    table.define(0, 0);
    assert!(table.is_defined(0));
    assert_eq!(table.apply(0), Ok(0));
    assert_eq!(symbols_of(&table), vec![(0, 0)]);
}

#[test]
fn test_zero_value_with_nonzero_id_is_listed() {
    let mut table = quiet_table();
    table.define(0x10, 0);
    assert_eq!(symbols_of(&table), vec![(0x10, 0)]);
}

#[test]
fn test_highest_identifier() {
    let mut table = quiet_table();
    table.define(u8::MAX, u8::MAX);
    assert_eq!(table.get(u8::MAX), Some(u8::MAX));
    assert_eq!(table.get(u8::MAX - 1), None);
}

// === Enumeration ===

#[test]
fn test_empty_table_enumerates_nothing() {
    let table = quiet_table();
    assert!(table.is_empty());
    assert_eq!(table.symbols().count(), 0);
}

#[test]
fn test_enumeration_is_in_ascending_id_order() {
    let mut table = quiet_table();
    table.define(5, 10);
    table.define(2, 20);
    table.define(200, 30);
    assert_eq!(symbols_of(&table), vec![(2, 20), (5, 10), (200, 30)]);
}

#[test]
fn test_enumeration_is_restartable() {
    let mut table = quiet_table();
    table.define(1, 1);
    table.define(2, 2);
    let first: Vec<_> = table.symbols().collect();
    let second: Vec<_> = table.symbols().collect();
    assert_eq!(first, second);
}

#[test]
fn test_full_table_enumerates_every_identifier() {
    let mut table = quiet_table();
    for id in 0..=u8::MAX {
        table.define(id, id.wrapping_mul(3));
    }
    assert_eq!(table.len(), MAX_SYMBOLS);
    assert!(table
        .symbols()
        .zip(0..=u8::MAX)
        .all(|(symbol, id)| symbol == Symbol::new(id, id.wrapping_mul(3))));
}

// === Initialize ===

#[test]
fn test_reinitialize_clears_all_bindings() {
    let mut table = quiet_table();
    for id in [0, 1, 42, 255] {
        table.define(id, 99);
    }
    table.initialize();
    assert!(table.is_empty());
    for id in 0..=u8::MAX {
        assert_eq!(table.apply(id), Err(SymbolError::NotDefined { id }));
    }
}

#[test]
fn test_end_to_end_scenario() {
    let mut table = quiet_table();
    table.define(1, 100);
    table.define(2, 200);
    assert_eq!(table.apply(1), Ok(100));
    assert!(table.apply(3).is_err());
    assert_eq!(symbols_of(&table), vec![(1, 100), (2, 200)]);
}

// === Notices ===

#[test]
fn test_notices_for_each_operation() {
    let notices = buffer_handler();
    let mut table = SymbolTable::with_notices(notices.clone());
    table.define(0x0A, 42);
    let _ = table.apply(0x0A);
    let _ = table.apply(0xFF);

    assert_eq!(
        notices.output(),
        "[Symbolic] Symbolic table initialized.\n\
         [Symbolic] Defined symbol 0x0A = 42\n\
         [Symbolic] Applied symbol 0x0A = 42\n\
         [Symbolic] Undefined symbol 0xFF\n"
    );
}

#[test]
fn test_get_emits_no_notice() {
    let notices = buffer_handler();
    let mut table = SymbolTable::with_notices(notices.clone());
    table.define(1, 1);
    notices.clear();
    assert_eq!(table.get(1), Some(1));
    assert_eq!(table.get(2), None);
    assert_eq!(notices.output(), "");
}

#[test]
fn test_reflect_announces_then_lists() {
    let notices = buffer_handler();
    let mut table = SymbolTable::with_notices(notices.clone());
    table.define(5, 10);
    table.define(2, 20);
    notices.clear();

    let listing = table.reflect();
    assert_eq!(
        listing,
        "[Symbolic] Current Symbol Table:\n  Symbol 0x02 = 20\n  Symbol 0x05 = 10"
    );
    assert_eq!(
        notices.output(),
        format!("[Meta] Reflection triggered.\n{listing}\n")
    );
}

#[test]
fn test_display_matches_listing_without_notice() {
    let notices = buffer_handler();
    let mut table = SymbolTable::with_notices(notices.clone());
    table.define(0xC8, 30);
    notices.clear();
    assert_eq!(table.to_string(), table.listing());
    assert_eq!(notices.output(), "");
}

#[test]
fn test_set_notices_keeps_bindings() {
    let mut table = quiet_table();
    table.define(4, 4);
    let notices = buffer_handler();
    table.set_notices(notices.clone());
    assert_eq!(table.apply(4), Ok(4));
    assert_eq!(notices.output(), "[Symbolic] Applied symbol 0x04 = 4\n");
}

#[test]
fn test_debug_lists_defined_symbols() {
    let mut table = quiet_table();
    table.define(1, 2);
    assert_eq!(
        format!("{table:?}"),
        "SymbolTable { symbols: [Symbol { id: 1, value: 2 }], .. }"
    );
}

mod proptest_table {
    use super::quiet_table;
    use crate::SymbolError;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn define_then_apply_returns_value(id in any::<u8>(), value in any::<u8>()) {
            let mut table = quiet_table();
            table.define(id, value);
            prop_assert_eq!(table.apply(id), Ok(value));
        }

        #[test]
        fn fresh_table_has_no_bindings(id in any::<u8>()) {
            let table = quiet_table();
            prop_assert_eq!(table.apply(id), Err(SymbolError::NotDefined { id }));
        }

        #[test]
        fn redefinition_keeps_last_value(id in any::<u8>(), v1 in any::<u8>(), v2 in any::<u8>()) {
            let mut table = quiet_table();
            table.define(id, v1);
            table.define(id, v2);
            prop_assert_eq!(table.apply(id), Ok(v2));
        }

        #[test]
        fn enumeration_is_sorted_and_matches_last_writes(
            defs in proptest::collection::vec((any::<u8>(), any::<u8>()), 0..64)
        ) {
            let mut table = quiet_table();
            let mut expected = std::collections::BTreeMap::new();
            for &(id, value) in &defs {
                table.define(id, value);
                expected.insert(id, value);
            }
            let actual: Vec<(u8, u8)> = table.symbols().map(Into::into).collect();
            let expected: Vec<(u8, u8)> = expected.into_iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
