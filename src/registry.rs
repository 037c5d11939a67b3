//! Chip coordinate registry
//!
//! The chip definition file maps between WCS chip numbers and row/column
//! labels. Both directions are kept as separate maps. They are not exact
//! inverses of each other - one keys by the combined label string, the
//! other by chip number and yields a [`ChipName`] record, so a caller
//! round-tripping goes through [`ChipName::label`].

use crate::models::{ChipId, ChipName};
use crate::parser::{parse_field, split_fields, ParseError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Bidirectional label <-> chip number lookup.
///
/// # Examples
///
/// ```
/// use wcsgrid::registry::ChipRegistry;
/// use std::io::Cursor;
///
/// let registry = ChipRegistry::parse(Cursor::new("5 B 3 B3\n")).unwrap();
/// assert_eq!(registry.chip_number("B3"), Some(5));
/// assert_eq!(registry.chip_name(5).unwrap().label(), "B3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChipRegistry {
    by_label: HashMap<String, ChipId>,
    by_number: HashMap<ChipId, ChipName>,
}

impl ChipRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry from a chip definition file.
    ///
    /// Format per line: `chip# row-letter column-number label`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parse a chip definition stream.
    ///
    /// The first malformed line aborts the load; nothing partial escapes.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut registry = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            let fields = split_fields(&line, 4, line_no)?;
            let chip = parse_field(&fields, 0, "chip number", line_no)?;
            let row = single_letter(fields[1], line_no)?;
            let name = ChipName { row, column: fields[2].to_string() };
            registry.register(fields[3].to_string(), chip, name);
        }
        Ok(registry)
    }

    /// Register both directions for one chip.
    ///
    /// A later registration for the same label or number replaces the
    /// earlier one.
    pub fn register(&mut self, label: String, chip: ChipId, name: ChipName) {
        self.by_label.insert(label, chip);
        self.by_number.insert(chip, name);
    }

    /// Chip number for a row/column label like `B3`.
    pub fn chip_number(&self, label: &str) -> Option<ChipId> {
        self.by_label.get(label).copied()
    }

    /// Row/column designation for a chip number.
    pub fn chip_name(&self, chip: ChipId) -> Option<&ChipName> {
        self.by_number.get(&chip)
    }

    /// Largest registered chip number, 0 when empty.
    pub fn max_chip(&self) -> ChipId {
        self.by_number.keys().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

fn single_letter(field: &str, line_no: usize) -> Result<char, ParseError> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c),
        _ => Err(ParseError::malformed(
            line_no,
            format!("invalid row letter '{}'", field),
        )),
    }
}
