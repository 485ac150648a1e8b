//! Streaming Markdown-to-ANSI rendering.
//!
//! `termstream_render` converts Markdown to terminal-styled text as it
//! arrives from a chunked source (for example a model token stream),
//! without requiring the whole document up front. [`StreamRenderer`]
//! buffers incomplete constructs (an open code fence, an in-progress
//! table) across chunk boundaries and hands each logical block to the
//! caller's [`Sink`] as soon as it is resolvable. [`render_to_string`] is
//! the one-shot convenience over the same machinery.
//!
//! The dialect is deliberately partial: the practical subset that renders
//! well in a terminal (headings, fenced code, pipe tables, lists,
//! blockquotes, rules, inline emphasis/code/links), not a conformant
//! Markdown parser.

pub mod ansi;
mod inline;
mod line;
pub mod style;
mod stream;
mod table;
mod table_detect;

pub use stream::Sink;
pub use stream::StreamRenderer;

/// Render a complete Markdown document in one call.
///
/// Builds a [`StreamRenderer`] over a collecting sink, writes `source`,
/// and flushes.
pub fn render_to_string(source: &str) -> String {
    let mut out = String::new();
    let mut renderer = StreamRenderer::new(|rendered: &str| out.push_str(rendered));
    renderer.write(source);
    renderer.flush();
    out
}
