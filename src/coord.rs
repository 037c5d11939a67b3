//! WCS grid coordinate labels
//!
//! A chip position is written `<RowLetter><ColumnNumber>`, e.g. `B3` or
//! `F23`. Rows run A-J, columns 0-40; column 0 is reserved for the
//! achromatic pole chips of rows A and J. The survey files contain stray
//! pole labels like `A17` or `J4` - those collapse onto the single pole
//! chip of their row.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for coordinate label parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    /// Input label was empty
    #[error("empty coordinate label")]
    Empty,
    /// Label does not start with a row letter
    #[error("coordinate label '{0}' does not start with a row letter")]
    MissingRow(String),
    /// Label has no digits after the row letter, or non-digit characters
    #[error("coordinate label '{0}' has no valid column number")]
    MissingColumn(String),
    /// Column digits do not fit an integer
    #[error("column number out of range in coordinate label '{0}'")]
    ColumnOutOfRange(String),
}

/// A normalized WCS grid coordinate.
///
/// `Display` renders the canonical token used throughout the foci data,
/// with a colon between row and column: `"B:3"`.
///
/// # Examples
///
/// ```
/// use wcsgrid::coord::GridCoord;
///
/// let coord = GridCoord::parse("F23").unwrap();
/// assert_eq!(coord, GridCoord { row: 'F', column: 23 });
/// assert_eq!(coord.to_string(), "F:23");
///
/// // Pole rows collapse: A and J only have the single chip at column 0
/// assert_eq!(GridCoord::parse("A12").unwrap().to_string(), "A:0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: char,
    pub column: u32,
}

impl GridCoord {
    /// Parse a raw label like `B3` into a normalized coordinate.
    ///
    /// Applies the pole collapse rule: rows `A` and `J` only exist at
    /// column 0, so any larger column number in those rows maps to 0.
    ///
    /// # Errors
    ///
    /// Returns `CoordError` if the label is empty, does not start with a
    /// letter, or is not followed by a plain digit string.
    pub fn parse(label: &str) -> Result<Self, CoordError> {
        let mut chars = label.chars();
        let row = chars.next().ok_or(CoordError::Empty)?;
        if !row.is_ascii_alphabetic() {
            return Err(CoordError::MissingRow(label.to_string()));
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordError::MissingColumn(label.to_string()));
        }
        let mut column: u32 = digits
            .parse()
            .map_err(|_| CoordError::ColumnOutOfRange(label.to_string()))?;

        if (row == 'A' || row == 'J') && column > 0 {
            column = 0;
        }

        Ok(Self { row, column })
    }

    /// Whether this is one of the achromatic pole chips (A0 or J0).
    pub fn is_pole(&self) -> bool {
        self.column == 0 && (self.row == 'A' || self.row == 'J')
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_core_label() {
        let coord = GridCoord::parse("B3").unwrap();
        assert_eq!(coord.row, 'B');
        assert_eq!(coord.column, 3);
        assert_eq!(coord.to_string(), "B:3");
    }

    #[test]
    fn test_parse_two_digit_column() {
        let coord = GridCoord::parse("I40").unwrap();
        assert_eq!(coord, GridCoord { row: 'I', column: 40 });
        assert_eq!(coord.to_string(), "I:40");
    }

    #[test]
    fn test_pole_collapse_row_a() {
        for label in ["A1", "A12", "A40"] {
            let coord = GridCoord::parse(label).unwrap();
            assert_eq!(coord, GridCoord { row: 'A', column: 0 }, "label {}", label);
            assert_eq!(coord.to_string(), "A:0");
        }
    }

    #[test]
    fn test_pole_collapse_row_j() {
        let coord = GridCoord::parse("J17").unwrap();
        assert_eq!(coord.to_string(), "J:0");
    }

    #[test]
    fn test_pole_column_zero_unchanged() {
        assert_eq!(GridCoord::parse("A0").unwrap().to_string(), "A:0");
        assert_eq!(GridCoord::parse("J0").unwrap().to_string(), "J:0");
    }

    #[test]
    fn test_other_rows_not_collapsed() {
        // Only A and J are pole rows; B40 stays put
        assert_eq!(GridCoord::parse("B40").unwrap().to_string(), "B:40");
    }

    #[test]
    fn test_is_pole() {
        assert!(GridCoord::parse("A0").unwrap().is_pole());
        assert!(GridCoord::parse("J30").unwrap().is_pole());
        assert!(!GridCoord::parse("B0").unwrap().is_pole());
        assert!(!GridCoord::parse("C5").unwrap().is_pole());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(GridCoord::parse(""), Err(CoordError::Empty));
    }

    #[test]
    fn test_parse_missing_row_letter() {
        assert!(matches!(GridCoord::parse("12"), Err(CoordError::MissingRow(_))));
    }

    #[test]
    fn test_parse_missing_column() {
        assert!(matches!(GridCoord::parse("B"), Err(CoordError::MissingColumn(_))));
        assert!(matches!(GridCoord::parse("B3x"), Err(CoordError::MissingColumn(_))));
    }

    #[test]
    fn test_parse_column_out_of_range() {
        assert!(matches!(
            GridCoord::parse("B99999999999999999999"),
            Err(CoordError::ColumnOutOfRange(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = GridCoord::parse("B?").unwrap_err();
        assert!(err.to_string().contains("B?"));
    }
}
