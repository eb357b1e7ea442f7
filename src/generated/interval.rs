//! Interval qualifier bitmask table.
//!
//! Source of truth: `INTERVAL_MASK(t)` / `INTERVAL_FULL_RANGE` in
//! `src/include/utils/datetime.h`. The first `typmod` of an `interval` column
//! packs a bitmask of these bits (plus a separate precision field this crate
//! does not need, since the spec's contract only asks for qualifier decoding).

/// Bit for a single field, e.g. `1 << MONTH`.
const MASK_YEAR: i32 = 1 << 2;
const MASK_MONTH: i32 = 1 << 1;
const MASK_DAY: i32 = 1 << 3;
const MASK_HOUR: i32 = 1 << 10;
const MASK_MINUTE: i32 = 1 << 11;
const MASK_SECOND: i32 = 1 << 12;

/// `INTERVAL_FULL_RANGE`: no qualifier restriction, i.e. plain `interval`.
pub const INTERVAL_MASK_FULL: i32 = 0x7FFF;

const MASK_YEAR_TO_MONTH: i32 = MASK_YEAR | MASK_MONTH;
const MASK_DAY_TO_HOUR: i32 = MASK_DAY | MASK_HOUR;
const MASK_DAY_TO_MINUTE: i32 = MASK_DAY | MASK_HOUR | MASK_MINUTE;
const MASK_DAY_TO_SECOND: i32 = MASK_DAY | MASK_HOUR | MASK_MINUTE | MASK_SECOND;
const MASK_HOUR_TO_MINUTE: i32 = MASK_HOUR | MASK_MINUTE;
const MASK_HOUR_TO_SECOND: i32 = MASK_HOUR | MASK_MINUTE | MASK_SECOND;
const MASK_MINUTE_TO_SECOND: i32 = MASK_MINUTE | MASK_SECOND;

/// Decodes an interval typmod bitmask into its lowercase qualifier tokens, in
/// the order they should be joined with `" to "` by the caller.
///
/// Returns `None` for [`INTERVAL_MASK_FULL`] (bare `interval`, nothing to render)
/// and for bit patterns this table does not recognize.
pub fn decode_interval_typmod(mask: i32) -> Option<&'static [&'static str]> {
    Some(match mask {
        m if m == MASK_YEAR => &["year"],
        m if m == MASK_MONTH => &["month"],
        m if m == MASK_DAY => &["day"],
        m if m == MASK_HOUR => &["hour"],
        m if m == MASK_MINUTE => &["minute"],
        m if m == MASK_SECOND => &["second"],
        m if m == MASK_YEAR_TO_MONTH => &["year", "month"],
        m if m == MASK_DAY_TO_HOUR => &["day", "hour"],
        m if m == MASK_DAY_TO_MINUTE => &["day", "minute"],
        m if m == MASK_DAY_TO_SECOND => &["day", "second"],
        m if m == MASK_HOUR_TO_MINUTE => &["hour", "minute"],
        m if m == MASK_HOUR_TO_SECOND => &["hour", "second"],
        m if m == MASK_MINUTE_TO_SECOND => &["minute", "second"],
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_masks_decode() {
        assert_eq!(decode_interval_typmod(MASK_YEAR), Some(&["year"][..]));
        assert_eq!(decode_interval_typmod(MASK_SECOND), Some(&["second"][..]));
    }

    #[test]
    fn range_masks_decode_in_from_to_order() {
        assert_eq!(
            decode_interval_typmod(MASK_YEAR_TO_MONTH),
            Some(&["year", "month"][..])
        );
        assert_eq!(
            decode_interval_typmod(MASK_DAY_TO_SECOND),
            Some(&["day", "second"][..])
        );
    }

    #[test]
    fn full_range_has_no_tokens() {
        assert_eq!(decode_interval_typmod(INTERVAL_MASK_FULL), None);
    }
}
