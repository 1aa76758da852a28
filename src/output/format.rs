// Thu Aug 27 2026 - Alex

use crate::rank::RankedEntry;

/// Renders ranked entries in the stable `rank:age=count` wire form,
/// e.g. `1:34=57`. Entry order is preserved.
pub struct ResultFormatter;

impl ResultFormatter {
    pub fn format_entry(entry: &RankedEntry) -> String {
        format!("{}:{}={}", entry.rank, entry.age, entry.count)
    }

    pub fn format_all(entries: &[RankedEntry]) -> Vec<String> {
        entries.iter().map(Self::format_entry).collect()
    }
}
