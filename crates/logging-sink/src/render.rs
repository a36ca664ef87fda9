//! crates/logging-sink/src/render.rs
//! Flattening of a [`Record`] into a line of text.

use std::fmt::Write as _;

use logging::Record;
use logging::template;

use crate::ansi::SgrStyle;

/// Appends the rendered form of `record` to `out`, without a newline.
///
/// Template segments are written in order, each styled by the slot its marker
/// names. Arguments follow, separated by single spaces. Without colour the
/// styles are dropped and every segment is shown; with colour, segments whose
/// style hides them are skipped.
///
/// ```
/// use logging::{Level, Record, Stream, Style};
/// use logging_sink::render_record;
///
/// let styles = [Style::new("color: #444; font-size: 0px"), Style::new("color: #F00"), Style::none()];
/// let record = Record {
///     level: Level::Error,
///     stream: Stream::Error,
///     namespace: "db",
///     template: "%c(error) %c[db]%c : lost 100%%",
///     styles: &styles,
///     args: &["conn#4".into()],
/// };
///
/// let mut plain = String::new();
/// render_record(&record, false, &mut plain);
/// assert_eq!(plain, "(error) [db] : lost 100% conn#4");
///
/// let mut colored = String::new();
/// render_record(&record, true, &mut colored);
/// assert_eq!(colored, "\x1b[38;2;255;0;0m[db]\x1b[0m : lost 100% conn#4");
/// ```
pub fn render_record(record: &Record<'_>, colored: bool, out: &mut String) {
    for segment in template::segments(record.template) {
        if !colored {
            out.push_str(&segment.text);
            continue;
        }
        let style = segment
            .slot
            .and_then(|slot| record.styles.get(slot))
            .map(|style| SgrStyle::parse(style.as_str()))
            .unwrap_or_default();
        if style.hidden {
            continue;
        }
        let style = style.to_anstyle();
        let _ = write!(
            out,
            "{}{}{}",
            style.render(),
            segment.text,
            style.render_reset()
        );
    }

    for arg in record.args {
        let _ = write!(out, " {arg}");
    }
}
