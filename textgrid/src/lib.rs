pub mod ansi;
pub mod cell;
pub mod container;
pub mod layout;
mod render;
pub mod style;
pub mod table;
pub mod transform;

pub use cell::{CellValue, ValueKind};
pub use container::{Axis, Grid, GridKind, Loc, SetError, SetOutcome};
pub use layout::SPAN_MARKER;
pub use table::Table;
pub use transform::{pack_rows, pivot, subgrid, RenderBlock};
