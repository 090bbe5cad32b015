//! Matrix transpose and multi-table grid composition.

use crate::cell::CellValue;
use crate::table::Table;

/// Transpose of a rectangular array: `pivot(a)[c][r] == a[r][c]`.
/// An involution on rectangular input.
pub fn pivot<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let num_cols = rows.first().map_or(0, Vec::len);
    (0..num_cols)
        .map(|col| rows.iter().map(|row| row[col].clone()).collect())
        .collect()
}

/// Arranges items into row-major groups of at most `width` per row.
pub fn pack_rows<T>(width: usize, items: impl IntoIterator<Item = T>) -> Vec<Vec<T>> {
    let width = width.max(1);
    let mut rows: Vec<Vec<T>> = Vec::new();
    for item in items {
        match rows.last_mut() {
            Some(row) if row.len() < width => row.push(item),
            _ => rows.push(vec![item]),
        }
    }
    rows
}

/// Anything that renders to a multi-line text block. Implemented by every
/// table, so tables with different cell types can be composed together.
pub trait RenderBlock {
    fn rendered(&self) -> String;
}

impl<T: CellValue> RenderBlock for Table<T> {
    fn rendered(&self) -> String {
        self.to_string()
    }
}

/// Composes already-rendered tables into one grid-shaped table of
/// `width` blocks per packed row.
///
/// Each block is split into display lines and padded with blank lines to
/// its packed row's tallest block, the packed row is transposed into
/// aligned single-line rows, wholly blank trailing rows are dropped, and
/// the results are flattened into one positional table with a rule line
/// registered at every packed-row boundary.
pub fn subgrid(width: usize, tables: &[&dyn RenderBlock]) -> Table<String> {
    let blocks: Vec<String> = tables.iter().map(|table| table.rendered()).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut boundaries: Vec<usize> = Vec::new();

    for group in pack_rows(width, blocks) {
        let split: Vec<Vec<String>> = group
            .iter()
            .map(|block| block.split('\n').map(str::to_owned).collect())
            .collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(0);
        let padded: Vec<Vec<String>> = split
            .into_iter()
            .map(|mut lines| {
                lines.resize(height, String::new());
                lines
            })
            .collect();
        let mut aligned = pivot(&padded);
        while aligned
            .last()
            .is_some_and(|line_row| line_row.concat().is_empty())
        {
            aligned.pop();
        }
        rows.extend(aligned);
        boundaries.push(rows.len());
    }
    // the final boundary is the end of the table, not a divider position
    boundaries.pop();

    Table::new(rows)
        .divider_after_rows(boundaries)
        .mid_divider(" =|= ")
        .left_border("|= ")
}
