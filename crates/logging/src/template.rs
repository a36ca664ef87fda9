//! crates/logging/src/template.rs
//! Styled template codec shared by the logger and sinks.
//!
//! A template is plain text in which [`STYLE_MARKER`] opens a new segment that
//! takes the next style slot. Literal `%` characters in dynamic text are
//! doubled so they never read as markers.

use std::fmt::Write as _;

use crate::levels::Level;

/// Placeholder that consumes the next style slot.
pub const STYLE_MARKER: &str = "%c";

/// Appends `text` to `out`, doubling every `%`.
pub fn push_literal(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..=pos]);
        out.push('%');
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);
}

/// Builds the record template.
///
/// Layout: optional `%c<timestamp> - `, then `%c(level) `, `%c[namespace]`,
/// and `%c : body`. The marker count equals the slot count produced by
/// [`StyleTable::slots_for`](crate::StyleTable::slots_for) for the same
/// arguments.
#[must_use]
pub fn compose(timestamp: Option<&str>, level: Level, namespace: &str, body: &str) -> String {
    let mut template = String::with_capacity(
        timestamp.map_or(0, str::len) + namespace.len() + body.len() + 32,
    );
    if let Some(timestamp) = timestamp {
        template.push_str(STYLE_MARKER);
        push_literal(&mut template, timestamp);
        template.push_str(" - ");
    }
    let _ = write!(template, "{STYLE_MARKER}({level}) {STYLE_MARKER}[");
    push_literal(&mut template, namespace);
    let _ = write!(template, "]{STYLE_MARKER} : ");
    push_literal(&mut template, body);
    template
}

/// Counts the style markers in `template`.
#[must_use]
pub fn placeholder_count(template: &str) -> usize {
    segments(template).filter(|segment| segment.slot.is_some()).count()
}

/// A run of text and the style slot it is rendered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Index into the style slots; `None` for text preceding the first marker.
    pub slot: Option<usize>,
    /// Unescaped text.
    pub text: String,
}

/// Splits a template into segments, unescaping `%%`.
///
/// ```
/// use logging::template::{Segment, segments};
///
/// let parts: Vec<_> = segments("%c(info) %c100%% done").collect();
/// assert_eq!(parts[1], Segment { slot: Some(1), text: "100% done".into() });
/// ```
pub fn segments(template: &str) -> Segments<'_> {
    Segments {
        rest: template,
        next_slot: 0,
        started: false,
    }
}

/// Iterator returned by [`segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    rest: &'a str,
    next_slot: usize,
    started: bool,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let mut slot = None;
        if let Some(after) = self.rest.strip_prefix(STYLE_MARKER) {
            slot = Some(self.next_slot);
            self.next_slot += 1;
            self.rest = after;
        } else if self.rest.is_empty() || self.started {
            return None;
        }
        self.started = true;

        let mut text = String::new();
        let mut chars = self.rest.char_indices().peekable();
        let mut consumed = self.rest.len();
        while let Some((index, ch)) = chars.next() {
            if ch != '%' {
                text.push(ch);
                continue;
            }
            match chars.peek() {
                Some((_, '%')) => {
                    text.push('%');
                    chars.next();
                }
                Some((_, 'c')) => {
                    consumed = index;
                    break;
                }
                _ => text.push('%'),
            }
        }
        self.rest = &self.rest[consumed..];
        Some(Segment { slot, text })
    }
}
