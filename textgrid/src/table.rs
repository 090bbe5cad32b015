use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::ansi;
use crate::cell::{CellValue, ValueKind};
use crate::container::{Grid, GridKind, Loc, SetOutcome};
use crate::render;
use crate::style::{AutoStyles, StyleConfig};

/// Border and divider strings plus the configured divider positions.
#[derive(Debug, Clone)]
pub(crate) struct Chrome {
    pub top_divider: String,
    pub side_divider: String,
    pub mid_divider: String,
    pub left_border: String,
    pub col_dividers: BTreeSet<usize>,
    pub row_dividers: BTreeSet<usize>,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            top_divider: "=".to_owned(),
            side_divider: " || ".to_owned(),
            mid_divider: " | ".to_owned(),
            left_border: "| ".to_owned(),
            col_dividers: BTreeSet::new(),
            row_dividers: BTreeSet::new(),
        }
    }
}

/// An aligned, optionally color-coded text table over a shared container.
///
/// The container is held behind `Rc<RefCell<..>>`: mutation through a
/// retained [`Grid`] handle is visible to the table, and [`Table::copy`]
/// shares the data while cloning the styling state. Single-threaded by
/// design; callers must finish mutating before rendering.
pub struct Table<T> {
    grid: Rc<RefCell<Grid<T>>>,
    pub(crate) styles: StyleConfig,
    pub(crate) chrome: Chrome,
    console_mode: bool,
}

impl<T: CellValue> Table<T> {
    pub fn new(data: impl Into<Grid<T>>) -> Self {
        Self {
            grid: Rc::new(RefCell::new(data.into())),
            styles: StyleConfig::default(),
            chrome: Chrome::default(),
            console_mode: false,
        }
    }

    /// Like [`Table::new`] but with automatic type-based cell coloring:
    /// numeric and boolean values render yellow, text values green, unless
    /// explicit styling has been configured for their row or column.
    pub fn console(data: impl Into<Grid<T>>) -> Self {
        let mut table = Self::new(data);
        table.console_mode = true;
        table
    }

    /// Wraps an already shared container handle.
    pub fn from_shared(grid: Rc<RefCell<Grid<T>>>) -> Self {
        Self {
            grid,
            styles: StyleConfig::default(),
            chrome: Chrome::default(),
            console_mode: false,
        }
    }

    /// Places `value` at the coordinate, growing the container as needed.
    /// Failures (addressing a keyed axis positionally or vice versa) are
    /// logged and reported as [`SetOutcome::Failed`], never propagated.
    pub fn set(&mut self, row: impl Into<Loc>, col: impl Into<Loc>, value: T) -> SetOutcome {
        let row = row.into();
        let col = col.into();
        match self.grid.borrow_mut().try_set(&row, &col, value) {
            Ok(outcome) => outcome,
            Err(error) => {
                log::error!("set({row}, {col}) failed: {error}");
                SetOutcome::Failed
            }
        }
    }

    /// Value at the coordinate, or `None` when absent. Never creates
    /// storage.
    pub fn get(&self, row: impl Into<Loc>, col: impl Into<Loc>) -> Option<T>
    where
        T: Clone,
    {
        self.grid.borrow().get(&row.into(), &col.into()).cloned()
    }

    pub fn num_rows(&self) -> usize {
        self.grid.borrow().num_rows()
    }

    pub fn num_cols(&self) -> usize {
        self.grid.borrow().num_cols()
    }

    pub fn row_labels(&self) -> Vec<String> {
        self.grid.borrow().row_labels()
    }

    pub fn col_labels(&self) -> Vec<String> {
        self.grid.borrow().col_labels()
    }

    pub fn rows_have_labels(&self) -> bool {
        self.grid.borrow().rows_have_labels()
    }

    pub fn cols_have_labels(&self) -> bool {
        self.grid.borrow().cols_have_labels()
    }

    pub fn kind(&self) -> GridKind {
        self.grid.borrow().kind()
    }

    /// The shared container handle. External mutation through it is
    /// visible to this table (and to every `copy`).
    pub fn raw(&self) -> Rc<RefCell<Grid<T>>> {
        Rc::clone(&self.grid)
    }

    /// A detached clone of the container in its current state.
    pub fn snapshot(&self) -> Grid<T>
    where
        T: Clone,
    {
        self.grid.borrow().clone()
    }

    /// A new table sharing this one's container while independently
    /// cloning every piece of styling and divider configuration.
    pub fn copy(&self) -> Self {
        Self {
            grid: Rc::clone(&self.grid),
            styles: self.styles.clone(),
            chrome: self.chrome.clone(),
            console_mode: self.console_mode,
        }
    }

    // Chainable configuration

    /// The repeated character of rule lines.
    pub fn top_divider(mut self, divider: impl Into<String>) -> Self {
        self.chrome.top_divider = divider.into();
        self
    }

    /// The wide inter-column separator, used at divider boundaries.
    pub fn side_divider(mut self, divider: impl Into<String>) -> Self {
        self.chrome.side_divider = divider.into();
        self
    }

    /// The standard inter-column separator.
    pub fn mid_divider(mut self, divider: impl Into<String>) -> Self {
        self.chrome.mid_divider = divider.into();
        self
    }

    /// Left border string; its character reversal becomes the right border.
    pub fn left_border(mut self, border: impl Into<String>) -> Self {
        self.chrome.left_border = border.into();
        self
    }

    /// Columns (1-based) after which the wide separator replaces the
    /// standard one.
    pub fn divider_after_cols(mut self, cols: impl IntoIterator<Item = usize>) -> Self {
        self.chrome.col_dividers.extend(cols);
        self
    }

    /// Line offsets at which a full-width rule line is inserted.
    pub fn divider_after_rows(mut self, rows: impl IntoIterator<Item = usize>) -> Self {
        self.chrome.row_dividers.extend(rows);
        self
    }

    pub fn row_codes(mut self, code: impl Into<String>, rows: impl IntoIterator<Item = usize>) -> Self {
        let code = code.into();
        for row in rows {
            self.styles.row_codes.insert(row, code.clone());
        }
        self
    }

    pub fn col_codes(mut self, code: impl Into<String>, cols: impl IntoIterator<Item = usize>) -> Self {
        let code = code.into();
        for col in cols {
            self.styles.col_codes.insert(col, code.clone());
        }
        self
    }

    /// Replaces the row component of every cell in the given columns.
    pub fn row_overrides_at_cols(
        mut self,
        code: impl Into<String>,
        cols: impl IntoIterator<Item = usize>,
    ) -> Self {
        let code = code.into();
        for col in cols {
            self.styles.row_override_at_col.insert(col, code.clone());
        }
        self
    }

    /// Replaces the column component of every cell in the given rows.
    pub fn col_overrides_at_rows(
        mut self,
        code: impl Into<String>,
        rows: impl IntoIterator<Item = usize>,
    ) -> Self {
        let code = code.into();
        for row in rows {
            self.styles.col_override_at_row.insert(row, code.clone());
        }
        self
    }

    /// Per-cell overrides keyed by 1-based (row, col) pairs.
    pub fn cell_overrides(
        mut self,
        code: impl Into<String>,
        cells: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let code = code.into();
        for cell in cells {
            self.styles.cell_overrides.insert(cell, code.clone());
        }
        self
    }

    /// Override keyed by a cell's rendered text, consulted after per-cell
    /// overrides and before the row/column components.
    pub fn value_override(mut self, value: impl Into<String>, code: impl Into<String>) -> Self {
        self.styles.value_overrides.insert(value.into(), code.into());
        self
    }

    /// Assigns a rotating background palette to all current columns with a
    /// contrasting foreground per column.
    pub fn colorize(mut self) -> Self {
        let num_cols = self.num_cols();
        self.styles.colorize(num_cols);
        self
    }

    /// The rendering with every styling token stripped; a Markdown
    /// pipe-table when both axes are labeled.
    pub fn as_markdown(&self) -> String {
        ansi::strip(&self.to_string())
    }

    /// Stringified grid contents (empty string for absent cells) plus the
    /// automatic console-mode tokens recorded while extracting them.
    pub(crate) fn cell_strings(&self) -> (Vec<Vec<String>>, AutoStyles) {
        let grid = self.grid.borrow();
        let mut auto = AutoStyles::new();
        let rows = grid
            .coords()
            .into_iter()
            .enumerate()
            .map(|(row_index, (row, cols))| {
                cols.into_iter()
                    .enumerate()
                    .map(|(col_index, col)| match grid.get(&row, &col) {
                        Some(value) => {
                            if self.console_mode {
                                let token = match value.kind() {
                                    ValueKind::Numeric => Some(ansi::YELLOW.fg),
                                    ValueKind::Text => Some(ansi::GREEN.fg),
                                    ValueKind::Other => None,
                                };
                                if let Some(token) = token {
                                    auto.insert((row_index + 1, col_index + 1), token);
                                }
                            }
                            value.to_string()
                        }
                        None => String::new(),
                    })
                    .collect()
            })
            .collect();
        (rows, auto)
    }
}

impl<T: CellValue> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}

impl<T: CellValue + fmt::Debug> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("kind", &self.kind())
            .field("rows", &self.num_rows())
            .field("cols", &self.num_cols())
            .finish()
    }
}
