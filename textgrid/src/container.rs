//! The four interchangeable storage shapes behind a table.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

/// Coordinate on one axis: positional for sequence axes, named for keyed
/// axes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Loc {
    At(usize),
    Named(String),
}

impl From<usize> for Loc {
    fn from(index: usize) -> Self {
        Loc::At(index)
    }
}

impl From<&str> for Loc {
    fn from(key: &str) -> Self {
        Loc::Named(key.to_owned())
    }
}

impl From<String> for Loc {
    fn from(key: String) -> Self {
        Loc::Named(key)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loc::At(index) => write!(f, "{index}"),
            Loc::Named(key) => f.write_str(key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Col => f.write_str("column"),
        }
    }
}

/// What a `set` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The mutation failed; the error was logged and the container was left
    /// as close to untouched as possible.
    Failed = 0,
    /// A previously absent position now holds the value.
    Inserted = 1,
    /// An existing position was overwritten.
    Updated = 2,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetError {
    #[error("{axis} axis is positional, cannot address it with key '{key}'")]
    KeyOnPositionalAxis { axis: Axis, key: String },

    #[error("{axis} axis is keyed, cannot address it with index {index}")]
    IndexOnKeyedAxis { axis: Axis, index: usize },
}

/// Shape descriptor for the backing container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    /// Positional rows of positional cells.
    Rows,
    /// Keyed rows of positional cells.
    KeyedRows,
    /// Positional rows of keyed cells.
    RowMaps,
    /// Keyed rows of keyed cells.
    Keyed,
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridKind::Rows => f.write_str("Vec<Vec>"),
            GridKind::KeyedRows => f.write_str("Map<Vec>"),
            GridKind::RowMaps => f.write_str("Vec<Map>"),
            GridKind::Keyed => f.write_str("Map<Map>"),
        }
    }
}

/// Logical rows x columns of cell values in one of four backing shapes.
/// The shape is fixed at construction; `None` entries in positional rows
/// are the null placeholders produced by growth padding.
#[derive(Debug, Clone)]
pub enum Grid<T> {
    Rows(Vec<Vec<Option<T>>>),
    KeyedRows(IndexMap<String, Vec<Option<T>>>),
    RowMaps(Vec<IndexMap<String, T>>),
    Keyed(IndexMap<String, IndexMap<String, T>>),
}

impl<T> Grid<T> {
    pub fn kind(&self) -> GridKind {
        match self {
            Grid::Rows(_) => GridKind::Rows,
            Grid::KeyedRows(_) => GridKind::KeyedRows,
            Grid::RowMaps(_) => GridKind::RowMaps,
            Grid::Keyed(_) => GridKind::Keyed,
        }
    }

    pub fn num_rows(&self) -> usize {
        match self {
            Grid::Rows(rows) => rows.len(),
            Grid::KeyedRows(map) => map.len(),
            Grid::RowMaps(rows) => rows.len(),
            Grid::Keyed(map) => map.len(),
        }
    }

    /// Longest row for positional columns; the number of distinct keys seen
    /// across all rows for keyed columns.
    pub fn num_cols(&self) -> usize {
        match self {
            Grid::Rows(rows) => rows.iter().map(Vec::len).max().unwrap_or(0),
            Grid::KeyedRows(map) => map.values().map(Vec::len).max().unwrap_or(0),
            Grid::RowMaps(_) | Grid::Keyed(_) => self.col_labels().len(),
        }
    }

    /// Row keys in insertion order; empty when rows are positional.
    pub fn row_labels(&self) -> Vec<String> {
        match self {
            Grid::KeyedRows(map) => map.keys().cloned().collect(),
            Grid::Keyed(map) => map.keys().cloned().collect(),
            Grid::Rows(_) | Grid::RowMaps(_) => Vec::new(),
        }
    }

    /// Union of column keys across all rows, first-seen order; empty when
    /// columns are positional.
    pub fn col_labels(&self) -> Vec<String> {
        let mut labels = IndexSet::new();
        match self {
            Grid::RowMaps(rows) => {
                for row in rows {
                    for key in row.keys() {
                        labels.insert(key.clone());
                    }
                }
            }
            Grid::Keyed(map) => {
                for row in map.values() {
                    for key in row.keys() {
                        labels.insert(key.clone());
                    }
                }
            }
            Grid::Rows(_) | Grid::KeyedRows(_) => {}
        }
        labels.into_iter().collect()
    }

    pub fn rows_have_labels(&self) -> bool {
        matches!(self, Grid::KeyedRows(_) | Grid::Keyed(_))
    }

    pub fn cols_have_labels(&self) -> bool {
        matches!(self, Grid::RowMaps(_) | Grid::Keyed(_))
    }

    /// Every (row, columns) accessor pair in row-major order. Each row lists
    /// the full logical column range, so absent entries surface as `None`
    /// from `get`.
    pub fn coords(&self) -> Vec<(Loc, Vec<Loc>)> {
        let cols: Vec<Loc> = if self.cols_have_labels() {
            self.col_labels().into_iter().map(Loc::Named).collect()
        } else {
            (0..self.num_cols()).map(Loc::At).collect()
        };
        if self.rows_have_labels() {
            self.row_labels()
                .into_iter()
                .map(|key| (Loc::Named(key), cols.clone()))
                .collect()
        } else {
            (0..self.num_rows())
                .map(|index| (Loc::At(index), cols.clone()))
                .collect()
        }
    }

    /// Value at a coordinate, or `None` when the row or the position within
    /// it is absent. Never creates storage. Addressing an axis with the
    /// wrong `Loc` kind is also `None`.
    pub fn get(&self, row: &Loc, col: &Loc) -> Option<&T> {
        match (self, row, col) {
            (Grid::Rows(rows), Loc::At(r), Loc::At(c)) => rows.get(*r)?.get(*c)?.as_ref(),
            (Grid::KeyedRows(map), Loc::Named(k), Loc::At(c)) => map.get(k)?.get(*c)?.as_ref(),
            (Grid::RowMaps(rows), Loc::At(r), Loc::Named(k)) => rows.get(*r)?.get(k),
            (Grid::Keyed(map), Loc::Named(r), Loc::Named(c)) => map.get(r)?.get(c),
            _ => None,
        }
    }

    /// Places `value` at the coordinate, growing the container as needed:
    /// absent keyed rows are inserted, absent positional rows are appended
    /// (gaps filled with empty rows), and positional columns are padded
    /// with placeholders up to the target index.
    pub(crate) fn try_set(
        &mut self,
        row: &Loc,
        col: &Loc,
        value: T,
    ) -> Result<SetOutcome, SetError> {
        match self {
            Grid::Rows(rows) => {
                let r = positional(row, Axis::Row)?;
                let c = positional(col, Axis::Col)?;
                while rows.len() <= r {
                    rows.push(Vec::new());
                }
                Ok(set_positional(&mut rows[r], c, value))
            }
            Grid::KeyedRows(map) => {
                let key = keyed(row, Axis::Row)?;
                let c = positional(col, Axis::Col)?;
                let cells = map.entry(key.to_owned()).or_default();
                Ok(set_positional(cells, c, value))
            }
            Grid::RowMaps(rows) => {
                let r = positional(row, Axis::Row)?;
                let key = keyed(col, Axis::Col)?;
                while rows.len() <= r {
                    rows.push(IndexMap::new());
                }
                Ok(set_keyed(&mut rows[r], key, value))
            }
            Grid::Keyed(map) => {
                let row_key = keyed(row, Axis::Row)?;
                let col_key = keyed(col, Axis::Col)?;
                let cells = map.entry(row_key.to_owned()).or_default();
                Ok(set_keyed(cells, col_key, value))
            }
        }
    }
}

fn positional(loc: &Loc, axis: Axis) -> Result<usize, SetError> {
    match loc {
        Loc::At(index) => Ok(*index),
        Loc::Named(key) => Err(SetError::KeyOnPositionalAxis {
            axis,
            key: key.clone(),
        }),
    }
}

fn keyed(loc: &Loc, axis: Axis) -> Result<&str, SetError> {
    match loc {
        Loc::Named(key) => Ok(key),
        Loc::At(index) => Err(SetError::IndexOnKeyedAxis {
            axis,
            index: *index,
        }),
    }
}

fn set_positional<T>(cells: &mut Vec<Option<T>>, col: usize, value: T) -> SetOutcome {
    while cells.len() <= col {
        cells.push(None);
    }
    let slot = &mut cells[col];
    let outcome = if slot.is_some() {
        SetOutcome::Updated
    } else {
        SetOutcome::Inserted
    };
    *slot = Some(value);
    outcome
}

fn set_keyed<T>(cells: &mut IndexMap<String, T>, key: &str, value: T) -> SetOutcome {
    let outcome = if cells.contains_key(key) {
        SetOutcome::Updated
    } else {
        SetOutcome::Inserted
    };
    cells.insert(key.to_owned(), value);
    outcome
}

impl<T> From<Vec<Vec<T>>> for Grid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Grid::Rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }
}

impl<T> From<IndexMap<String, Vec<T>>> for Grid<T> {
    fn from(rows: IndexMap<String, Vec<T>>) -> Self {
        Grid::KeyedRows(
            rows.into_iter()
                .map(|(key, row)| (key, row.into_iter().map(Some).collect()))
                .collect(),
        )
    }
}

impl<T> From<Vec<IndexMap<String, T>>> for Grid<T> {
    fn from(rows: Vec<IndexMap<String, T>>) -> Self {
        Grid::RowMaps(rows)
    }
}

impl<T> From<IndexMap<String, IndexMap<String, T>>> for Grid<T> {
    fn from(rows: IndexMap<String, IndexMap<String, T>>) -> Self {
        Grid::Keyed(rows)
    }
}
