//! Record timestamps: `M/D/YYYY @ HH:MM:SS.mmm`.

use std::fmt::Write as _;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

const TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Formats the current local time.
///
/// Falls back to UTC when the local offset cannot be determined.
#[must_use]
pub fn now() -> String {
    let now = OffsetDateTime::now_utc();
    let local = UtcOffset::current_local_offset().map_or(now, |offset| now.to_offset(offset));
    format(local)
}

/// Formats `moment`; milliseconds are not zero-padded.
#[must_use]
pub fn format(moment: OffsetDateTime) -> String {
    let mut out = String::with_capacity(24);
    if let Ok(date) = moment.format(DATE_FORMAT) {
        out.push_str(&date);
    }
    out.push_str(" @ ");
    if let Ok(clock) = moment.format(TIME_FORMAT) {
        out.push_str(&clock);
    }
    let _ = write!(out, ".{}", moment.millisecond());
    out
}
