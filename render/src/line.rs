//! Generic (non-block) line rendering: headings, rules, blockquotes, list
//! items, and the plain-text fallback. First match wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline;
use crate::style;

fn must_compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid regex {pattern}: {err}"))
}

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| must_compile(r"^(#{1,6})\s+(.*)$"));
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| must_compile(r"^\s*(?:-{3,}|\*{3,}|_{3,})\s*$"));
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| must_compile(r"^(\s*)> ?(.*)$"));
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| must_compile(r"^(\s*)(\d+)\.(\s+)(.*)$"));
static UNORDERED_RE: LazyLock<Regex> = LazyLock::new(|| must_compile(r"^(\s*)[-*+](\s+)(.*)$"));

/// Render one non-block line to styled text (no trailing newline).
///
/// Blank lines render to the empty string; the caller's newline is what
/// separates paragraphs.
pub(crate) fn render_line(line: &str) -> String {
    if line.trim().is_empty() {
        return String::new();
    }
    if let Some(caps) = HEADING_RE.captures(line) {
        let styled = inline::apply_inline_styles(&caps[2]);
        let (on, off) = (style::HEADING.on, style::HEADING.off);
        return format!("{on}{styled}{off}");
    }
    if RULE_RE.is_match(line) {
        let (on, off) = (style::DIM.on, style::DIM.off);
        return format!("{on}{}{off}", style::RULE_GLYPH.repeat(style::RULE_WIDTH));
    }
    if let Some(caps) = QUOTE_RE.captures(line) {
        let styled = inline::apply_inline_styles(&caps[2]);
        let (on, off) = (style::DIM.on, style::DIM.off);
        return format!("{}{on}{}{off} {styled}", &caps[1], style::QUOTE_BAR);
    }
    if let Some(caps) = ORDERED_RE.captures(line) {
        let styled = inline::apply_inline_styles(&caps[4]);
        return format!("{}{}.{}{styled}", &caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = UNORDERED_RE.captures(line) {
        let styled = inline::apply_inline_styles(&caps[3]);
        return format!("{}{}{}{styled}", &caps[1], style::BULLET, &caps[2]);
    }
    inline::apply_inline_styles(line)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_drops_hashes_and_wraps_text() {
        let rendered = render_line("# Title");
        assert_eq!(
            rendered,
            format!("{}Title{}", style::HEADING.on, style::HEADING.off)
        );
        assert!(!rendered.contains('#'));
    }

    #[test]
    fn heading_without_space_is_not_a_heading() {
        assert_eq!(render_line("#nope"), "#nope");
    }

    #[test]
    fn seventh_hash_is_not_a_heading() {
        assert_eq!(render_line("####### deep"), "####### deep");
    }

    #[test]
    fn rules_normalize_to_fixed_width() {
        let expected = format!(
            "{}{}{}",
            style::DIM.on,
            style::RULE_GLYPH.repeat(style::RULE_WIDTH),
            style::DIM.off
        );
        assert_eq!(render_line("---"), expected);
        assert_eq!(render_line("****"), expected);
        assert_eq!(render_line("____"), expected);
        assert_eq!(render_line("  ----------  "), expected);
    }

    #[test]
    fn blockquote_keeps_indent_and_adds_bar() {
        assert_eq!(
            render_line("  > quoted"),
            format!(
                "  {}{}{} quoted",
                style::DIM.on,
                style::QUOTE_BAR,
                style::DIM.off
            )
        );
    }

    #[test]
    fn ordered_item_keeps_literal_marker() {
        assert_eq!(render_line("  12. item"), "  12. item");
    }

    #[test]
    fn unordered_item_marker_becomes_bullet() {
        assert_eq!(render_line("- item"), format!("{} item", style::BULLET));
        assert_eq!(render_line("  * item"), format!("  {} item", style::BULLET));
        assert_eq!(render_line("+ item"), format!("{} item", style::BULLET));
    }

    #[test]
    fn dash_without_space_is_plain_text() {
        assert_eq!(render_line("-item"), "-item");
    }

    #[test]
    fn blank_line_renders_empty() {
        assert_eq!(render_line(""), "");
        assert_eq!(render_line("   "), "");
    }

    #[test]
    fn fallback_applies_inline_styles() {
        assert_eq!(
            render_line("plain **bold**"),
            format!("plain {}bold{}", style::BOLD.on, style::BOLD.off)
        );
    }
}
