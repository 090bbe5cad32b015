//! Row/column/cell styling state and the precedence resolver.

use std::collections::HashMap;

use crate::ansi;

/// Automatic per-coordinate tokens recorded while extracting cell text in
/// console mode, keyed by 1-based (row, col).
pub(crate) type AutoStyles = HashMap<(usize, usize), &'static str>;

/// The six styling mappings plus the axis defaults. Rows and columns are
/// 1-based, matching the rendered coordinates (row 0 is the header line,
/// column 0 the row-label column).
#[derive(Debug, Clone)]
pub struct StyleConfig {
    pub(crate) row_codes: HashMap<usize, String>,
    pub(crate) col_codes: HashMap<usize, String>,
    pub(crate) row_override_at_col: HashMap<usize, String>,
    pub(crate) col_override_at_row: HashMap<usize, String>,
    pub(crate) cell_overrides: HashMap<(usize, usize), String>,
    pub(crate) value_overrides: HashMap<String, String>,
    pub(crate) default_row: String,
    pub(crate) default_col: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            row_codes: HashMap::new(),
            col_codes: HashMap::new(),
            row_override_at_col: HashMap::new(),
            col_override_at_row: HashMap::new(),
            cell_overrides: HashMap::new(),
            value_overrides: HashMap::new(),
            default_row: ansi::DEFAULT_FG.to_owned(),
            default_col: ansi::DEFAULT_BG.to_owned(),
        }
    }
}

impl StyleConfig {
    /// Token applied to the cell at (row, col), highest precedence first:
    /// the exact cell override, then a value override for the cell's text,
    /// then the row component and column component concatenated. In console
    /// mode an automatic token wins over the untouched default pair.
    pub(crate) fn resolve(
        &self,
        row: usize,
        col: usize,
        value: Option<&str>,
        auto: Option<&AutoStyles>,
    ) -> String {
        if let Some(token) = self.cell_overrides.get(&(row, col)) {
            return token.clone();
        }
        if let Some(token) = value.and_then(|text| self.value_overrides.get(text)) {
            return token.clone();
        }
        let row_code = self
            .row_override_at_col
            .get(&col)
            .or_else(|| self.row_codes.get(&row))
            .unwrap_or(&self.default_row);
        let col_code = self
            .col_override_at_row
            .get(&row)
            .or_else(|| self.col_codes.get(&col))
            .unwrap_or(&self.default_col);
        if row_code == &self.default_row && col_code == &self.default_col {
            if let Some(token) = auto.and_then(|map| map.get(&(row, col))) {
                return (*token).to_owned();
            }
        }
        format!("{row_code}{col_code}")
    }

    /// Background codes 41-46 then 101-106, cycling across columns.
    const PALETTE: [u16; 12] = [41, 42, 43, 44, 45, 46, 101, 102, 103, 104, 105, 106];

    /// Assigns a rotating background palette to columns 1..=`num_cols`, with
    /// a contrasting foreground forced at each column: white on the dark
    /// blue/magenta backgrounds, black everywhere else.
    pub(crate) fn colorize(&mut self, num_cols: usize) {
        for col in 1..=num_cols {
            let code = Self::PALETTE[(col - 1) % Self::PALETTE.len()];
            self.col_codes.insert(col, ansi::sgr(code));
            let contrast = if code == 44 || code == 45 {
                ansi::sgr(37)
            } else {
                ansi::sgr(30)
            };
            self.row_override_at_col.insert(col, contrast);
        }
    }
}
