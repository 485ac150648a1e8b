//! Newline-gated streaming renderer: line assembly plus the block router.
//!
//! [`StreamRenderer`] buffers incoming chunks and exposes a commit boundary
//! at each newline. Complete lines land in an append-only pending buffer
//! that the block router drains with an explicit state machine (modes
//! Normal/Code/Table) over an index cursor. The router needs at most one
//! line of look-ahead: a pipe-containing line is only a table header once
//! the following line is known to be a separator, so draining pauses there
//! until more input (or the final flush) arrives.
//!
//! On finalization, `flush()` relaxes the look-ahead requirement, renders
//! any open table, and closes any open code block with a style reset.

use crate::line;
use crate::style;
use crate::table::TableState;
use crate::table_detect;

/// Consumer of rendered output.
///
/// Each call receives one complete rendered unit, a styled line or a whole
/// table block, already terminated with a trailing newline. Implemented
/// for any `FnMut(&str)` closure.
pub trait Sink {
    fn emit(&mut self, rendered: &str);
}

impl<F: FnMut(&str)> Sink for F {
    fn emit(&mut self, rendered: &str) {
        self(rendered);
    }
}

/// The block context the router is currently inside.
///
/// A single enum (rather than independent flags) makes the code-block /
/// table mutual exclusion invariant structural: there is no state in which
/// both are open.
#[derive(Debug)]
enum BlockMode {
    Normal,
    Code,
    Table(TableState),
}

/// Incremental Markdown-to-ANSI renderer over a caller-supplied [`Sink`].
///
/// One instance per logical document: feed chunks with [`write`], signal
/// end-of-stream with [`flush`]. Both methods call the sink synchronously,
/// zero or more times, before returning. Reusing a renderer for a second
/// document after `flush` is not supported.
///
/// [`write`]: StreamRenderer::write
/// [`flush`]: StreamRenderer::flush
pub struct StreamRenderer<S: Sink> {
    sink: S,
    /// Unterminated tail of the most recent chunk; never contains a newline.
    buffer: String,
    /// Complete lines not yet resolved into output, in arrival order.
    pending: Vec<String>,
    mode: BlockMode,
}

impl<S: Sink> StreamRenderer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            buffer: String::new(),
            pending: Vec::new(),
            mode: BlockMode::Normal,
        }
    }

    /// Feed more raw Markdown text.
    ///
    /// Splits off every complete line into the pending buffer (the
    /// remainder after the last newline stays buffered) and drains as much
    /// as is currently resolvable. A call may buffer everything when more
    /// look-ahead is needed.
    pub fn write(&mut self, chunk: &str) {
        tracing::trace!("write: {chunk:?}");
        self.buffer.push_str(chunk);
        if let Some(end) = self.buffer.rfind('\n') {
            let complete: String = self.buffer.drain(..=end).collect();
            self.pending.extend(
                complete
                    .split_inclusive('\n')
                    .map(|l| l.strip_suffix('\n').unwrap_or(l).to_string()),
            );
        }
        self.drain_pending(false);
    }

    /// Signal end-of-stream and force resolution of all buffered state.
    ///
    /// Any unterminated tail becomes a final line; look-ahead requirements
    /// are relaxed (a lone table candidate resolves as a plain line); an
    /// open table is rendered as-is; an open code block emits a style reset
    /// without fabricating a closing fence. The state ends reset-equivalent
    /// to fresh, but feeding a second document afterwards is not a
    /// supported use.
    pub fn flush(&mut self) {
        tracing::debug!(
            buffered = self.buffer.len(),
            pending = self.pending.len(),
            "flush: resolving remaining stream state"
        );
        if !self.buffer.is_empty() {
            let tail = std::mem::take(&mut self.buffer);
            self.pending.push(tail);
        }
        self.drain_pending(true);
        match std::mem::replace(&mut self.mode, BlockMode::Normal) {
            BlockMode::Table(table) => self.sink.emit(&table.render()),
            BlockMode::Code => self.sink.emit(&format!("{}\n", style::CODE_BLOCK.off)),
            BlockMode::Normal => {}
        }
    }

    /// Drain pending lines through the mode state machine.
    ///
    /// `last` marks final-flush mode, where a table candidate at the end of
    /// the buffer no longer waits for its separator look-ahead. The cursor
    /// only advances when a line is consumed; a table-closing line is left
    /// in place and reprocessed under the restored mode on the next
    /// iteration.
    fn drain_pending(&mut self, last: bool) {
        let mut cursor = 0;
        while cursor < self.pending.len() {
            match &mut self.mode {
                BlockMode::Table(table) => {
                    let line = &self.pending[cursor];
                    if line.contains('|') && !table_detect::is_separator_line(line) {
                        table.push_row(table_detect::parse_table_cells(line));
                        cursor += 1;
                    } else {
                        let rendered = table.render();
                        self.mode = BlockMode::Normal;
                        self.sink.emit(&rendered);
                    }
                }
                BlockMode::Code => {
                    let line = &self.pending[cursor];
                    cursor += 1;
                    if is_fence_line(line) {
                        self.mode = BlockMode::Normal;
                        self.sink.emit(&format!("{}\n", style::CODE_BLOCK.off));
                    } else {
                        // No inline styling inside code blocks.
                        self.sink.emit(&format!("{line}\n"));
                    }
                }
                BlockMode::Normal => {
                    let line = &self.pending[cursor];
                    if is_fence_line(line) {
                        let start = code_block_start(line);
                        self.mode = BlockMode::Code;
                        self.sink.emit(&start);
                        cursor += 1;
                        continue;
                    }
                    if line.contains('|') {
                        match self.pending.get(cursor + 1) {
                            // The one point where draining pauses mid-queue:
                            // a table candidate needs its next line.
                            None if !last => break,
                            Some(next) if table_detect::is_separator_line(next) => {
                                let header = table_detect::parse_table_cells(line);
                                self.mode = BlockMode::Table(TableState::new(header));
                                cursor += 2;
                                continue;
                            }
                            _ => {}
                        }
                    }
                    let rendered = line::render_line(line);
                    self.sink.emit(&format!("{rendered}\n"));
                    cursor += 1;
                }
            }
        }
        self.pending.drain(..cursor);
    }
}

/// A fence line's trimmed content begins with three backticks. A second
/// fence always closes the open block, never nests.
fn is_fence_line(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// The style-start line emitted when a fence opens: the code-block style
/// switch, preceded by a dim-italic label when the fence carries an info
/// string.
fn code_block_start(line: &str) -> String {
    let info = line.trim_start().trim_start_matches('`');
    let label = info.split_whitespace().next().unwrap_or_default();
    let code_on = style::CODE_BLOCK.on;
    if label.is_empty() {
        format!("{code_on}\n")
    } else {
        let (italic_on, italic_off) = (style::ITALIC.on, style::ITALIC.off);
        format!("{code_on}{italic_on}{label}{italic_off}\n")
    }
}
