//! Mapping an in-cycle offset to a tractate and page.

use crate::daf::Daf;
use crate::tractate::TractateTable;

/// Find the page studied `offset` study days into a cycle over `table`.
///
/// Panics if `offset` lies outside the table. Callers derive offsets from the
/// table's own length, so an out-of-range offset means the cycle bookkeeping
/// and the table disagree.
pub fn locate(offset: i64, table: &TractateTable) -> Daf {
    assert!(offset >= 0, "negative offset {offset} into tractate table");

    let mut total = 0;
    for entry in table.entries() {
        total += table.days_in(entry);
        if offset < total {
            let page = i64::from(entry.page_count) + 1 - (total - offset)
                + i64::from(entry.page_correction);
            return Daf {
                tractate: entry.name,
                page: page as u32,
            };
        }
    }

    panic!(
        "offset {offset} exceeds tractate table of {} study days",
        table.total_days()
    );
}
