//! Word wrapping without splitting words.
//!
//! [`wrap`] reflows text into lines of at most `width` characters, breaking
//! only at whitespace. A word longer than `width` is emitted whole on its own
//! line rather than being split.
//!
//! # Chunking
//!
//! The text is scanned greedily into chunks. At each position the scanner
//! takes the longest run of up to `width` characters (never crossing a line
//! terminator) that ends just before a whitespace character or at the end of
//! input. That trailing whitespace character belongs to the chunk. When no
//! such run exists, a position holding a word takes the entire word plus one
//! trailing whitespace character. Any other position is skipped.
//!
//! Widths count Unicode scalar values. Whitespace is Unicode `White_Space`
//! without U+0085 (NEXT LINE), plus U+FEFF (BYTE ORDER MARK). Line
//! terminators are `\n`, `\r`, U+2028 and U+2029.
//!
//! Chunks are then joined with the line separator. Because a chunk keeps its
//! trailing whitespace, every line boundary carries that whitespace followed
//! by the separator:
//!
//! ```rust
//! use jsonstyle::{wrap_str, WrapOptions};
//!
//! let wrapped = wrap_str("one two three", &WrapOptions::new().width(7));
//! assert_eq!(wrapped, "one two \nthree");
//! ```

use thiserror::Error;

/// Default maximum number of characters per line.
pub const DEFAULT_WIDTH: usize = 75;

/// Default text placed between wrapped lines.
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

/// Error returned by [`wrap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    /// No text was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Options controlling [`wrap`].
///
/// A width of `0` or an empty separator fall back to [`DEFAULT_WIDTH`] and
/// [`DEFAULT_LINE_SEPARATOR`] when wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    width: usize,
    line_separator: String,
}

impl WrapOptions {
    /// Creates options with the default width and separator.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            line_separator: DEFAULT_LINE_SEPARATOR.to_string(),
        }
    }

    /// Sets the maximum number of characters per line.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the text placed between lines, for example `"\n"` or `"<br>"`.
    pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// The width used for wrapping, after coercing `0` to the default.
    pub fn effective_width(&self) -> usize {
        if self.width == 0 {
            DEFAULT_WIDTH
        } else {
            self.width
        }
    }

    /// The separator used for wrapping, after coercing `""` to the default.
    pub fn effective_line_separator(&self) -> &str {
        if self.line_separator.is_empty() {
            DEFAULT_LINE_SEPARATOR
        } else {
            &self.line_separator
        }
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps `text` at the configured width without splitting words.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] when `text` is `None`.
///
/// # Example
///
/// ```rust
/// use jsonstyle::{wrap, WrapError, WrapOptions};
///
/// let opts = WrapOptions::new().width(10);
/// assert_eq!(wrap(Some("Hi, guys, this is Eddie"), &opts).unwrap(),
///            "Hi, guys, \nthis is \nEddie");
/// assert!(matches!(wrap(None, &opts), Err(WrapError::InvalidArgument(_))));
/// ```
pub fn wrap(text: Option<&str>, options: &WrapOptions) -> Result<String, WrapError> {
    let text = text.ok_or(WrapError::InvalidArgument("text is null"))?;
    Ok(wrap_str(text, options))
}

/// Wraps `text` at the configured width without splitting words.
///
/// This is the infallible form of [`wrap`] for callers that already hold text.
pub fn wrap_str(text: &str, options: &WrapOptions) -> String {
    if options.width == 0 || options.line_separator.is_empty() {
        log::trace!(
            "wrap: coercing width={} separator={:?} to defaults",
            options.width,
            options.line_separator
        );
    }
    chunks(text, options.effective_width()).join(options.effective_line_separator())
}

/// Splits `text` into wrap chunks of at most `width` characters.
///
/// Each chunk keeps the single whitespace character that ended it. Chunks
/// holding one overlong word may exceed `width`. A `width` of `0` is treated
/// as `1`.
pub fn chunks(text: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(pos, _)| pos);

    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let end = bounded_run(&chars, i, width).or_else(|| whole_word(&chars, i));
        match end {
            Some(end) => {
                out.push(&text[byte_at(i)..byte_at(end)]);
                i = end;
            }
            None => i += 1,
        }
    }
    out
}

/// Longest run of `1..=width` non-terminator characters starting at `start`
/// that is followed by whitespace or the end of input. Returns the exclusive
/// end index, including the trailing whitespace character.
fn bounded_run(chars: &[(usize, char)], start: usize, width: usize) -> Option<usize> {
    let run = chars[start..]
        .iter()
        .take(width)
        .take_while(|&&(_, c)| !is_line_terminator(c))
        .count();

    (1..=run).rev().find_map(|len| {
        let next = start + len;
        match chars.get(next) {
            None => Some(next),
            Some(&(_, c)) if is_space(c) => Some(next + 1),
            Some(_) => None,
        }
    })
}

/// The whole word starting at `start` plus one trailing whitespace character.
fn whole_word(chars: &[(usize, char)], start: usize) -> Option<usize> {
    if is_space(chars[start].1) {
        return None;
    }
    let len = chars[start..]
        .iter()
        .take_while(|&&(_, c)| !is_space(c))
        .count();
    let next = start + len;
    Some(if next < chars.len() { next + 1 } else { next })
}

fn is_space(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
