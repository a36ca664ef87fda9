//! crates/logging-sink/src/ansi.rs
//! Translation of CSS-like style tokens into `anstyle` terminal styles.
//!
//! Themes describe styles as declarations such as `color: #F00; font-size: 9px`.
//! A terminal understands a small subset of that vocabulary; everything else
//! is ignored.
//!
//! | Declaration                     | Effect                       |
//! |---------------------------------|------------------------------|
//! | `color: #RGB` / `#RRGGBB`       | 24-bit foreground            |
//! | `background[-color]: #…`        | 24-bit background            |
//! | `font-weight: bold` or `>= 600` | bold                         |
//! | `font-style: italic`            | italic                       |
//! | `text-decoration: underline`    | underline                    |
//! | `font-size: 0` / `0px`          | text is hidden               |

use std::fmt;

use anstyle::{Color, Effects, RgbColor, Style};

/// Parses `#RGB` or `#RRGGBB`, case-insensitively.
///
/// ```
/// use anstyle::RgbColor;
/// use logging_sink::ansi::parse_hex;
///
/// assert_eq!(parse_hex("#FD9327"), Some(RgbColor(0xFD, 0x93, 0x27)));
/// assert_eq!(parse_hex("#aaa"), Some(RgbColor(0xAA, 0xAA, 0xAA)));
/// assert_eq!(parse_hex("red"), None);
/// ```
#[must_use]
pub fn parse_hex(value: &str) -> Option<RgbColor> {
    let digits = value.strip_prefix('#')?;
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |text: &str| u8::from_str_radix(text, 16).ok();
    match digits.len() {
        3 => {
            let short =
                |index: usize| channel(&digits[index..=index]).map(|nibble| nibble * 0x11);
            Some(RgbColor(short(0)?, short(1)?, short(2)?))
        }
        6 => Some(RgbColor(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

/// Terminal attributes derived from one style token.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SgrStyle {
    /// Foreground colour.
    pub foreground: Option<RgbColor>,
    /// Background colour.
    pub background: Option<RgbColor>,
    /// Bold weight.
    pub bold: bool,
    /// Italic face.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Zero font size: the segment is not shown at all.
    pub hidden: bool,
}

impl SgrStyle {
    /// Parses a `;`-separated declaration list. Unknown properties and
    /// malformed values are skipped.
    ///
    /// ```
    /// use logging_sink::ansi::SgrStyle;
    ///
    /// let style = SgrStyle::parse("color: #444; font-size: 0px");
    /// assert!(style.hidden);
    /// assert_eq!(style.to_anstyle().render().to_string(), "\x1b[38;2;68;68;68m");
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let mut style = Self::default();
        for declaration in token.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim();
            match property.as_str() {
                "color" => style.foreground = parse_hex(value).or(style.foreground),
                "background" | "background-color" => {
                    style.background = parse_hex(value).or(style.background);
                }
                "font-weight" => style.bold = is_bold(value),
                "font-style" => style.italic = value.eq_ignore_ascii_case("italic"),
                "text-decoration" => {
                    style.underline = value
                        .split_whitespace()
                        .any(|part| part.eq_ignore_ascii_case("underline"));
                }
                "font-size" => style.hidden = is_zero_size(value),
                _ => {}
            }
        }
        style
    }

    /// Reports whether the style sets no visible attribute.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.to_anstyle().is_plain()
    }

    /// The terminal style for this token. Hiding has no terminal equivalent
    /// and is left to the renderer.
    #[must_use]
    pub fn to_anstyle(&self) -> Style {
        let mut effects = Effects::new();
        if self.bold {
            effects |= Effects::BOLD;
        }
        if self.italic {
            effects |= Effects::ITALIC;
        }
        if self.underline {
            effects |= Effects::UNDERLINE;
        }
        Style::new()
            .fg_color(self.foreground.map(Color::Rgb))
            .bg_color(self.background.map(Color::Rgb))
            .effects(effects)
    }
}

fn is_bold(value: &str) -> bool {
    value.eq_ignore_ascii_case("bold")
        || value.eq_ignore_ascii_case("bolder")
        || value.parse::<u16>().is_ok_and(|weight| weight >= 600)
}

fn is_zero_size(value: &str) -> bool {
    let number = value
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%')
        .trim();
    number.parse::<f32>().is_ok_and(|size| size.abs() <= f32::EPSILON)
}

impl fmt::Display for SgrStyle {
    /// Writes the escape sequence selecting this style; nothing for a plain style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_anstyle().render())
    }
}
