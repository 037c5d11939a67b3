//! Line-oriented parsing for the WCS fixed-format data files
//!
//! All files are whitespace/tab-delimited plain text, one record per line,
//! no header row. Each loader makes a single pass over the file; the first
//! malformed line aborts the load and nothing partial is returned. File
//! handles are scoped to the call and released on every exit path.
//!
//! Each loader exists in two forms: `load_*` opens a file path and
//! `parse_*` consumes any buffered reader, which is what the tests use.

use crate::coord::GridCoord;
use crate::models::{ClabData, FociData, NamingData, SpeakerData, SpeakerRecord};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Error type for load failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO error while opening or reading the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A line did not match the expected record shape
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
}

impl ParseError {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::Malformed { line, message: message.into() }
    }
}

/// Split a line on whitespace, requiring at least `min` fields.
pub(crate) fn split_fields(line: &str, min: usize, line_no: usize) -> Result<Vec<&str>, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < min {
        return Err(ParseError::malformed(
            line_no,
            format!("expected at least {} fields, found {}", min, fields.len()),
        ));
    }
    Ok(fields)
}

/// Parse one field, naming it in the error message on failure.
pub(crate) fn parse_field<T: FromStr>(
    fields: &[&str],
    index: usize,
    what: &str,
    line_no: usize,
) -> Result<T, ParseError> {
    fields[index]
        .parse()
        .map_err(|_| ParseError::malformed(line_no, format!("invalid {} '{}'", what, fields[index])))
}

/// Read WCS naming data (`term.txt`) from a file path.
///
/// Format per line: `language# speaker# chip# term`.
pub fn load_naming_data<P: AsRef<Path>>(path: P) -> Result<NamingData, ParseError> {
    let file = File::open(path)?;
    parse_naming_data(BufReader::new(file))
}

/// Parse WCS naming data from a buffered reader.
///
/// Builds the nested language -> speaker -> chip -> term mapping; a later
/// line for the same triple overwrites the earlier one.
pub fn parse_naming_data<R: BufRead>(reader: R) -> Result<NamingData, ParseError> {
    let mut data = NamingData::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let fields = split_fields(&line, 4, line_no)?;
        let language = parse_field(&fields, 0, "language number", line_no)?;
        let speaker = parse_field(&fields, 1, "speaker number", line_no)?;
        let chip = parse_field(&fields, 2, "chip number", line_no)?;
        data.insert(language, speaker, chip, fields[3].to_string());
    }
    Ok(data)
}

/// Read WCS foci data (`foci-exp.txt`) from a file path.
///
/// Format per line: `language# speaker# term# term-abbrev grid-coord`.
pub fn load_foci_data<P: AsRef<Path>>(path: P) -> Result<FociData, ParseError> {
    let file = File::open(path)?;
    parse_foci_data(BufReader::new(file))
}

/// Parse WCS foci data from a buffered reader.
///
/// Coordinate labels go through [`GridCoord::parse`], which collapses the
/// stray pole variants (`A1`..`A40`, `J1`..`J40`) onto `A:0` / `J:0`. The
/// term number field is validated but not stored - the term abbreviation
/// is the key the rest of the data uses.
pub fn parse_foci_data<R: BufRead>(reader: R) -> Result<FociData, ParseError> {
    let mut data = FociData::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let fields = split_fields(&line, 5, line_no)?;
        let language = parse_field(&fields, 0, "language number", line_no)?;
        let speaker = parse_field(&fields, 1, "speaker number", line_no)?;
        let _term_number: u32 = parse_field(&fields, 2, "term number", line_no)?;
        let term = fields[3];
        let coord = GridCoord::parse(fields[4])
            .map_err(|e| ParseError::malformed(line_no, e.to_string()))?;
        data.insert(language, speaker, term.to_string(), coord);
    }
    Ok(data)
}

/// Read WCS speaker demographics (`spkr-lsas.txt`) from a file path.
///
/// Format per line: `language# speaker# age gender`.
pub fn load_speaker_data<P: AsRef<Path>>(path: P) -> Result<SpeakerData, ParseError> {
    let file = File::open(path)?;
    parse_speaker_data(BufReader::new(file))
}

/// Parse WCS speaker demographics from a buffered reader.
///
/// Age and gender stay raw strings; duplicate (age, gender) pairs for the
/// same speaker are dropped.
pub fn parse_speaker_data<R: BufRead>(reader: R) -> Result<SpeakerData, ParseError> {
    let mut data = SpeakerData::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let fields = split_fields(&line, 4, line_no)?;
        let language = parse_field(&fields, 0, "language number", line_no)?;
        let speaker = parse_field(&fields, 1, "speaker number", line_no)?;
        let record = SpeakerRecord {
            age: fields[2].to_string(),
            gender: fields[3].to_string(),
        };
        data.insert(language, speaker, record);
    }
    Ok(data)
}

/// Read WCS chromaticity data (`cnum-vhcm-lab-new.txt`) from a file path.
///
/// The first field is the chip id; the last three fields are the
/// coordinates. Columns in between are ignored.
pub fn load_clab_data<P: AsRef<Path>>(path: P) -> Result<ClabData, ParseError> {
    let file = File::open(path)?;
    parse_clab_data(BufReader::new(file))
}

/// Parse WCS chromaticity data from a buffered reader.
///
/// Coordinates are kept as raw text tokens; a later line for the same chip
/// id overwrites the earlier one.
pub fn parse_clab_data<R: BufRead>(reader: R) -> Result<ClabData, ParseError> {
    let mut data = ClabData::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let fields = split_fields(&line, 4, line_no)?;
        let chip = parse_field(&fields, 0, "chip id", line_no)?;
        let n = fields.len();
        data.insert(
            chip,
            [
                fields[n - 3].to_string(),
                fields[n - 2].to_string(),
                fields[n - 1].to_string(),
            ],
        );
    }
    Ok(data)
}
