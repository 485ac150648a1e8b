//! Process-wide ANSI styling constants.
//!
//! Every escape sequence the renderer emits comes from this read-only table.
//! Styles are expressed as on/off pairs rather than bare resets so wrapped
//! regions compose: turning bold off (`22`) does not clobber an enclosing
//! foreground color the way `0` would.

/// An on/off pair of SGR escape sequences wrapped around styled content.
#[derive(Clone, Copy, Debug)]
pub struct StylePair {
    pub on: &'static str,
    pub off: &'static str,
}

/// `**bold**` / `__bold__` spans.
pub const BOLD: StylePair = StylePair {
    on: "\x1b[1m",
    off: "\x1b[22m",
};

/// `*italic*` / `_italic_` spans, and fence info-string labels.
pub const ITALIC: StylePair = StylePair {
    on: "\x1b[3m",
    off: "\x1b[23m",
};

/// `~~strikethrough~~` spans.
pub const STRIKETHROUGH: StylePair = StylePair {
    on: "\x1b[9m",
    off: "\x1b[29m",
};

/// `` `code` `` spans (cyan foreground).
pub const CODE_SPAN: StylePair = StylePair {
    on: "\x1b[36m",
    off: "\x1b[39m",
};

/// `[text](url)` link text (underlined blue).
pub const LINK: StylePair = StylePair {
    on: "\x1b[4;34m",
    off: "\x1b[24;39m",
};

/// Headings and table header rows: bold plus the accent color, applied as a
/// group around already inline-styled content.
pub const HEADING: StylePair = StylePair {
    on: "\x1b[1;36m",
    off: "\x1b[22;39m",
};

/// Dim regions: horizontal rules and blockquote bars.
pub const DIM: StylePair = StylePair {
    on: "\x1b[2m",
    off: "\x1b[22m",
};

/// Fenced code blocks. `on` is emitted as the style-start line when a fence
/// opens; `off` is a full reset emitted when the fence closes (or at flush
/// for an unterminated block).
pub const CODE_BLOCK: StylePair = StylePair {
    on: "\x1b[2m",
    off: "\x1b[0m",
};

/// Glyph repeated to draw a horizontal rule.
pub const RULE_GLYPH: &str = "─";

/// Fixed width of a rendered horizontal rule, independent of the source
/// rule's length or marker character.
pub const RULE_WIDTH: usize = 40;

/// Blockquote marker glyph.
pub const QUOTE_BAR: &str = "│";

/// Unordered list marker glyph.
pub const BULLET: &str = "•";
