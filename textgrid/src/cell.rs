use std::fmt;

/// Broad classification of a cell value, used by console-style tables to
/// pick an automatic foreground token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Numeric,
    Text,
    Other,
}

/// A value that can live in a table cell.
///
/// The `Display` bound is the rendering contract: every payload must have a
/// meaningful textual form of its own. Types without one simply cannot be
/// stored, so the check happens at compile time rather than at table
/// construction.
pub trait CellValue: fmt::Display {
    fn kind(&self) -> ValueKind {
        ValueKind::Other
    }
}

macro_rules! numeric_cells {
    ($($t:ty),* $(,)?) => {
        $(impl CellValue for $t {
            fn kind(&self) -> ValueKind {
                ValueKind::Numeric
            }
        })*
    };
}

numeric_cells!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool);

macro_rules! text_cells {
    ($($t:ty),* $(,)?) => {
        $(impl CellValue for $t {
            fn kind(&self) -> ValueKind {
                ValueKind::Text
            }
        })*
    };
}

text_cells!(String, &str, char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_classify_as_numeric() {
        assert_eq!(7u32.kind(), ValueKind::Numeric);
        assert_eq!((-1i64).kind(), ValueKind::Numeric);
        assert_eq!(1.5f64.kind(), ValueKind::Numeric);
        assert_eq!(true.kind(), ValueKind::Numeric);
    }

    #[test]
    fn strings_classify_as_text() {
        assert_eq!("hi".kind(), ValueKind::Text);
        assert_eq!(String::from("hi").kind(), ValueKind::Text);
        assert_eq!('x'.kind(), ValueKind::Text);
    }
}
