//! Assembles the bordered, padded, styled text block from a layout.

use crate::ansi;
use crate::cell::CellValue;
use crate::layout::{self, LayoutOptions, PlacedCell};
use crate::style::{AutoStyles, StyleConfig};
use crate::table::{Chrome, Table};

pub(crate) fn render<T: CellValue>(table: &Table<T>) -> String {
    let chrome = &table.chrome;
    let styles = &table.styles;
    let num_cols = table.num_cols();
    let rows_have_labels = table.rows_have_labels();
    let right_border: String = chrome.left_border.chars().rev().collect();

    let (cells, auto) = table.cell_strings();
    let col_labels = table.col_labels();
    let labels = (!col_labels.is_empty()).then_some(col_labels.as_slice());

    let opts = LayoutOptions {
        col_dividers: chrome.col_dividers.clone(),
        mid_len: chrome.mid_divider.chars().count(),
        side_len: chrome.side_divider.chars().count(),
    };
    let laid = layout::layout(&cells, labels, &opts);

    let mut lines: Vec<String> = laid
        .rows
        .iter()
        .enumerate()
        .map(|(index, placed)| {
            let body = join_cells(placed, index + 1, num_cols, chrome, styles, Some(&auto), true);
            let prefix = if rows_have_labels {
                ""
            } else {
                chrome.left_border.as_str()
            };
            format!("{prefix}{body}{right_border}")
        })
        .collect();

    // Row-label column: a single unsplit column before the main grid,
    // sized independently of the data columns.
    let mut row_label_width = 0;
    if rows_have_labels {
        let row_labels = table.row_labels();
        row_label_width = row_labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        for (index, label) in row_labels.iter().enumerate() {
            let padded = layout::pad_cell(label, row_label_width).unwrap_or_else(|| label.clone());
            let style = styles.resolve(index + 1, 0, None, Some(&auto));
            if let Some(line) = lines.get_mut(index) {
                let rest = std::mem::take(line);
                *line = format!(
                    "{}{style}{padded}{}{}{rest}",
                    chrome.left_border,
                    ansi::RESET,
                    chrome.side_divider
                );
            }
        }
    }

    // Header line plus its rule line, both through the same joiner as the
    // body so divider placement matches.
    if let Some(labels) = labels {
        let header_cells: Vec<PlacedCell> = labels
            .iter()
            .enumerate()
            .map(|(index, label)| PlacedCell {
                text: layout::pad_cell(label, laid.col_widths[index])
                    .unwrap_or_else(|| label.clone()),
                end: index + 1,
            })
            .collect();
        let joined = join_cells(&header_cells, 0, num_cols, chrome, styles, None, false);
        let label_separator = if rows_have_labels {
            chrome.side_divider.as_str()
        } else {
            ""
        };
        let header = format!(
            "{}{}{label_separator}{joined}{right_border}",
            chrome.left_border,
            "-".repeat(row_label_width)
        );

        let underline_cells: Vec<PlacedCell> = header_cells
            .iter()
            .map(|cell| PlacedCell {
                text: chrome.top_divider.repeat(cell.text.chars().count()),
                end: cell.end,
            })
            .collect();
        let corner = if row_label_width > 0 {
            format!(
                "{}{}",
                chrome.top_divider.repeat(row_label_width),
                chrome.side_divider
            )
        } else {
            String::new()
        };
        let underline = format!(
            "{}{corner}{}{right_border}",
            chrome.left_border,
            join_cells(&underline_cells, 0, num_cols, chrome, styles, None, false)
        );

        lines.insert(0, underline);
        lines.insert(0, header);
    }

    // Full-width rule lines, highest offset first so earlier insertions
    // do not shift pending ones.
    if !lines.is_empty() && !chrome.row_dividers.is_empty() {
        let table_width = ansi::visible_width(&lines[0])
            .saturating_sub(2 * chrome.left_border.chars().count());
        let rule = format!(
            "{}{}{right_border}",
            chrome.left_border,
            chrome.top_divider.repeat(table_width)
        );
        for &offset in chrome.row_dividers.iter().rev() {
            lines.insert(offset.min(lines.len()), rule.clone());
        }
    }

    let mut output = lines.join(&format!("{}\n", ansi::RESET));
    output.push_str(ansi::RESET);
    output
}

/// Wraps every cell as `<style><text><reset>` and interleaves separators:
/// the wide one immediately after divider-flagged columns, the standard one
/// elsewhere, none after the final column. The style column key is the
/// cell's end column.
fn join_cells(
    cells: &[PlacedCell],
    row: usize,
    num_cols: usize,
    chrome: &Chrome,
    styles: &StyleConfig,
    auto: Option<&AutoStyles>,
    lookup_values: bool,
) -> String {
    let mut out = String::new();
    for cell in cells {
        let stripped;
        let value = if lookup_values {
            stripped = ansi::strip(&cell.text);
            Some(stripped.trim_end())
        } else {
            None
        };
        out.push_str(&styles.resolve(row, cell.end, value, auto));
        out.push_str(&cell.text);
        out.push_str(ansi::RESET);
        if cell.end < num_cols {
            if chrome.col_dividers.contains(&cell.end) {
                out.push_str(&chrome.side_divider);
            } else {
                out.push_str(&chrome.mid_divider);
            }
        }
    }
    out
}
