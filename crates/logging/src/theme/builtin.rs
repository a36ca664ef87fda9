//! Built-in `light` and `dark` themes.
//!
//! Tokens are CSS-like declarations; `logging-sink` translates them into
//! terminal escapes.

use super::{StyleKey, StyleTable};
use crate::levels::Level;

const TIME: &str = "color: #AAA; font-size: 9px";
const LEVEL_LABEL: &str = "color: #444; font-size: 0px";

fn table(levels: [[&str; 2]; Level::COUNT]) -> StyleTable {
    let table = StyleTable::new()
        .with(StyleKey::Time, [TIME])
        .with(StyleKey::LevelLabel, [LEVEL_LABEL]);
    Level::ALL
        .into_iter()
        .zip(levels)
        .fold(table, |table, (level, tokens)| {
            table.with(StyleKey::Level(level), tokens)
        })
}

/// The default theme, tuned for light backgrounds.
#[must_use]
pub fn light() -> StyleTable {
    table([
        ["color: #F00", "color: #F00"],
        ["color: #F00", "color: #F00"],
        ["color: #FD9327", "color: #FD9327"],
        ["color: #66D9EF", "color: #111"],
        ["color: #A6E22D", "color: #444"],
        ["color: #666", "color: #666"],
        ["color: #888", "color: #999"],
    ])
}

/// A theme tuned for dark backgrounds.
#[must_use]
pub fn dark() -> StyleTable {
    table([
        ["color: #FFF", "color: #FFF"],
        ["color: #FFF", "color: #DDD"],
        ["color: #FD9327", "color: #DDD"],
        ["color: #66D9EF", "color: #DDD"],
        ["color: #A6E22D", "color: #AAA"],
        ["color: #777", "color: #888"],
        ["color: #555", "color: #666"],
    ])
}
