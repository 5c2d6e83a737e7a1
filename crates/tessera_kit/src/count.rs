//! Badge count formatting

/// Largest count shown verbatim
pub const COUNT_CAP: i64 = 99;

/// Display text of a badge count
///
/// Counts above [`COUNT_CAP`] read `"99+"`. Negative counts are clamped to
/// zero.
pub fn format_count(count: i64) -> String {
    if count > COUNT_CAP {
        format!("{COUNT_CAP}+")
    } else {
        count.max(0).to_string()
    }
}
