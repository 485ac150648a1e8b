//! Accumulated table state and its renderer.

use crate::ansi;
use crate::inline;
use crate::style;

/// Narrowest a column may render, even when every cell is shorter.
const MIN_COLUMN_WIDTH: usize = 3;

/// A table being accumulated: the header row plus any data rows seen so
/// far. Rendering happens once, when the table closes (mode exit or flush).
#[derive(Debug)]
pub(crate) struct TableState {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableState {
    pub(crate) fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render the whole table as one newline-terminated block.
    ///
    /// Column count comes from the header; widths are the maximum *visual*
    /// (escape-stripped) width of the styled cells in each column, floored
    /// at [`MIN_COLUMN_WIDTH`]. Short rows pad out with empty cells; cells
    /// beyond the header's column count are dropped.
    pub(crate) fn render(&self) -> String {
        let columns = self.header.len();
        let styled_header: Vec<String> = self
            .header
            .iter()
            .map(|cell| inline::apply_inline_styles(cell))
            .collect();
        let styled_rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .take(columns)
                    .map(|cell| inline::apply_inline_styles(cell))
                    .collect()
            })
            .collect();

        let mut widths = vec![MIN_COLUMN_WIDTH; columns];
        for (i, cell) in styled_header.iter().enumerate() {
            widths[i] = widths[i].max(ansi::visual_width(cell));
        }
        for row in &styled_rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(ansi::visual_width(cell));
            }
        }

        let mut out = String::new();
        let (on, off) = (style::HEADING.on, style::HEADING.off);
        out.push_str(&format!("{on}{}{off}\n", format_row(&styled_header, &widths)));
        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&format!("{}\n", format_row(&dashes, &widths)));
        for row in &styled_rows {
            out.push_str(&format!("{}\n", format_row(row, &widths)));
        }
        out
    }
}

/// Format one row as `| cell | cell | ... |`, padding each cell to its
/// column width on visual length. Missing trailing cells render as empty
/// padded cells.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or_default();
            let pad = width.saturating_sub(ansi::visual_width(cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}
