//! Span-aware column-width computation.
//!
//! Widths are discovered in two stages: an initial per-column maximum over
//! single-column values, then a fixed-point loop that re-formats every row
//! and widens the columns of any spanned cell whose content does not fit.
//! Styling tokens never count toward width; padding preserves them
//! verbatim.

use std::collections::BTreeSet;

use crate::ansi;

/// Sentinel cell text meaning "this logical column is part of the previous
/// visible cell". Must not be the first element of a row; that case is a
/// caller error and is not checked.
pub const SPAN_MARKER: &str = "&";

/// A visible cell: its padded text and the 1-based exclusive index of the
/// last logical column it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCell {
    pub text: String,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub col_widths: Vec<usize>,
    pub rows: Vec<Vec<PlacedCell>>,
}

/// Separator geometry the width computation has to account for inside
/// spans. Column-divider indices are 1-based boundary positions.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    pub col_dividers: BTreeSet<usize>,
    pub mid_len: usize,
    pub side_len: usize,
}

/// Computes the layout for a rectangular grid of stringified cells.
/// Column labels, when present, participate in the width maxima but never
/// in span merging.
pub fn layout(cells: &[Vec<String>], col_labels: Option<&[String]>, opts: &LayoutOptions) -> Layout {
    let mut col_widths = initial_widths(cells, col_labels);
    loop {
        match place_rows(cells, &col_widths, opts) {
            Ok(rows) => return Layout { col_widths, rows },
            Err(overflow) => {
                // A spanned cell did not fit: widen every column it covers
                // by one and retry. Each pass strictly grows at least one
                // width, so the loop terminates.
                log::trace!("span overflow, widening columns {overflow:?}");
                for col in overflow {
                    if let Some(width) = col_widths.get_mut(col) {
                        *width += 1;
                    }
                }
            }
        }
    }
}

/// Per-column maximum visible length over values that terminate in that
/// column. Span markers and the cells they extend contribute nothing; the
/// widening loop accounts for them later. The column count is the longest
/// row, so every span's columns stay in range of the widths even on
/// ragged input.
fn initial_widths(cells: &[Vec<String>], col_labels: Option<&[String]>) -> Vec<usize> {
    let num_cols = cells
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(col_labels.map_or(0, <[String]>::len));
    (0..num_cols)
        .map(|index| {
            let mut max = 0;
            for row in cells {
                let text = match row.get(index) {
                    Some(text) => text,
                    None => continue,
                };
                if text.as_str() == SPAN_MARKER {
                    continue;
                }
                let spans_right = row
                    .get(index + 1)
                    .is_some_and(|next| next.as_str() == SPAN_MARKER);
                if spans_right {
                    continue;
                }
                max = max.max(ansi::visible_width(text));
            }
            if let Some(label) = col_labels.and_then(|labels| labels.get(index)) {
                max = max.max(label.chars().count());
            }
            max
        })
        .collect()
}

fn place_rows(
    cells: &[Vec<String>],
    col_widths: &[usize],
    opts: &LayoutOptions,
) -> Result<Vec<Vec<PlacedCell>>, Vec<usize>> {
    cells
        .iter()
        .map(|row| place_row(row, col_widths, opts))
        .collect()
}

/// Left-to-right scan of one row. Runs of the span marker are folded into
/// the pending cell; each pending cell is flushed when the run ends, padded
/// to the total width of the columns it covers plus the separators inside
/// the span.
fn place_row(
    row: &[String],
    col_widths: &[usize],
    opts: &LayoutOptions,
) -> Result<Vec<PlacedCell>, Vec<usize>> {
    let mut placed = Vec::new();
    let mut pending = "";
    let mut span = 0usize;
    for end in 0..=row.len() {
        let current = row.get(end).map_or("", String::as_str);
        if end < row.len() && current == SPAN_MARKER {
            span += 1;
            continue;
        }
        let span_cols: Vec<usize> = (0..=span)
            .map(|offset| end.saturating_sub(offset + 1))
            .collect();
        let target = if end == 0 {
            0
        } else {
            let content: usize = span_cols
                .iter()
                .map(|col| col_widths.get(*col).copied().unwrap_or(0))
                .sum();
            content + separator_len(span, end, opts)
        };
        let text = pad_cell(pending, target).ok_or(span_cols)?;
        if !text.is_empty() {
            placed.push(PlacedCell { text, end });
        }
        pending = current;
        span = 0;
    }
    Ok(placed)
}

/// Total length of the separators that fall inside a span ending at the
/// 1-based exclusive column `end`: the wide separator at configured
/// divider boundaries, the standard one elsewhere.
fn separator_len(span: usize, end: usize, opts: &LayoutOptions) -> usize {
    (end.saturating_sub(span)..end)
        .map(|boundary| {
            if opts.col_dividers.contains(&boundary) {
                opts.side_len
            } else {
                opts.mid_len
            }
        })
        .sum()
}

/// Right-pads `text` to a visible width of exactly `target`, keeping any
/// embedded styling tokens. `None` when the content is already wider.
pub(crate) fn pad_cell(text: &str, target: usize) -> Option<String> {
    let visible = ansi::visible_width(text);
    if visible > target {
        return None;
    }
    let mut padded = String::with_capacity(text.len() + (target - visible));
    padded.push_str(text);
    for _ in visible..target {
        padded.push(' ');
    }
    Some(padded)
}
