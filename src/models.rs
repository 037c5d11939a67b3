//! Data models for the loaded WCS structures
//!
//! Each loader in [`crate::parser`] produces one of these types. They are
//! plain nested maps built in a single pass over the source file and never
//! mutated afterwards. All of them serialize to JSON for notebook-style
//! workflows.

use crate::coord::GridCoord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// WCS language number.
pub type LanguageId = u32;
/// Speaker number within a language.
pub type SpeakerId = u32;
/// Chip number, 1-based over the 330-chip grid.
pub type ChipId = u32;

/// Row/column designation of a chip.
///
/// The column is kept as the raw text token from the chip file so the
/// combined label can be reconstructed by concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipName {
    pub row: char,
    pub column: String,
}

impl ChipName {
    /// Reconstruct the combined row/column label, e.g. `B3`.
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.column)
    }
}

/// Demographics of one interview session.
///
/// Age stays a raw string - the survey files contain entries like `adult`
/// alongside plain numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerRecord {
    pub age: String,
    pub gender: String,
}

/// Naming responses: language -> speaker -> chip -> term.
///
/// # Examples
///
/// ```
/// use wcsgrid::parser::parse_naming_data;
/// use std::io::Cursor;
///
/// let data = parse_naming_data(Cursor::new("1 1 1 LB\n1 1 2 WA\n")).unwrap();
/// assert_eq!(data.term(1, 1, 1), Some("LB"));
/// assert_eq!(data.term(1, 1, 2), Some("WA"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamingData {
    pub languages: HashMap<LanguageId, HashMap<SpeakerId, HashMap<ChipId, String>>>,
}

impl NamingData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a term. A later record for the same (language, speaker, chip)
    /// triple overwrites the earlier one.
    pub fn insert(
        &mut self,
        language: LanguageId,
        speaker: SpeakerId,
        chip: ChipId,
        term: String,
    ) {
        self.languages
            .entry(language)
            .or_default()
            .entry(speaker)
            .or_default()
            .insert(chip, term);
    }

    /// Look up the term a speaker gave for a chip.
    pub fn term(&self, language: LanguageId, speaker: SpeakerId, chip: ChipId) -> Option<&str> {
        self.languages
            .get(&language)?
            .get(&speaker)?
            .get(&chip)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Best-example responses: language -> speaker -> term -> coordinates.
///
/// Coordinate sequences preserve insertion order; an exact duplicate
/// coordinate for the same term is dropped. Multiple reported fixations on
/// the same pole chip otherwise show up as noise after pole collapse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FociData {
    pub languages: HashMap<LanguageId, HashMap<SpeakerId, HashMap<String, Vec<GridCoord>>>>,
}

impl FociData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a focus coordinate for a term, dropping exact duplicates.
    pub fn insert(
        &mut self,
        language: LanguageId,
        speaker: SpeakerId,
        term: String,
        coord: GridCoord,
    ) {
        let sequence = self
            .languages
            .entry(language)
            .or_default()
            .entry(speaker)
            .or_default()
            .entry(term)
            .or_default();
        if !sequence.contains(&coord) {
            sequence.push(coord);
        }
    }

    /// The coordinates a speaker picked as best examples of a term,
    /// in file order.
    pub fn foci(&self, language: LanguageId, speaker: SpeakerId, term: &str) -> Option<&[GridCoord]> {
        self.languages
            .get(&language)?
            .get(&speaker)?
            .get(term)
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Speaker demographics: language -> speaker -> records.
///
/// A speaker can appear on several lines; exact duplicate (age, gender)
/// pairs are dropped, insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeakerData {
    pub languages: HashMap<LanguageId, HashMap<SpeakerId, Vec<SpeakerRecord>>>,
}

impl SpeakerData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a demographics record, dropping exact duplicates.
    pub fn insert(&mut self, language: LanguageId, speaker: SpeakerId, record: SpeakerRecord) {
        let records = self
            .languages
            .entry(language)
            .or_default()
            .entry(speaker)
            .or_default();
        if !records.contains(&record) {
            records.push(record);
        }
    }

    pub fn records(&self, language: LanguageId, speaker: SpeakerId) -> Option<&[SpeakerRecord]> {
        self.languages
            .get(&language)?
            .get(&speaker)
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Chromaticity coordinates per chip, kept as raw text tokens.
///
/// The source file mixes columns of different provenance; only the first
/// field (chip id) and the last three (coordinates) are meaningful here.
/// Callers needing numbers go through [`ClabData::lab`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClabData {
    pub chips: HashMap<ChipId, [String; 3]>,
}

impl ClabData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record coordinates for a chip. A later record for the same chip
    /// overwrites the earlier one.
    pub fn insert(&mut self, chip: ChipId, coords: [String; 3]) {
        self.chips.insert(chip, coords);
    }

    /// Raw coordinate tokens for a chip.
    pub fn coords(&self, chip: ChipId) -> Option<&[String; 3]> {
        self.chips.get(&chip)
    }

    /// Coordinates parsed as floats. `None` if the chip is unknown or a
    /// token is not numeric.
    pub fn lab(&self, chip: ChipId) -> Option<[f64; 3]> {
        let [l, a, b] = self.chips.get(&chip)?;
        Some([l.parse().ok()?, a.parse().ok()?, b.parse().ok()?])
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}
