//! Term valuation helpers
//!
//! Analysis code colors the chart by mapping each naming term to a scalar.
//! These helpers assign one uniform random draw per term and map term
//! sequences through such an assignment.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for valuation lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A term was missing from the valuation mapping
    #[error("term '{0}' has no assigned value")]
    UnknownTerm(String),
}

/// Assign an independent uniform random value in [0, 1) to each distinct
/// term.
///
/// Duplicate terms in the input keep their first draw.
///
/// # Examples
///
/// ```
/// use wcsgrid::values::assign_random_values;
///
/// let values = assign_random_values(["LB", "WA"]);
/// assert_eq!(values.len(), 2);
/// assert!(values["LB"] >= 0.0 && values["LB"] < 1.0);
/// ```
pub fn assign_random_values<I, S>(terms: I) -> HashMap<String, f64>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut values = HashMap::new();
    for term in terms {
        values.entry(term.into()).or_insert_with(rand::random::<f64>);
    }
    values
}

/// Map a term sequence through a valuation, positionally.
///
/// # Errors
///
/// Fails on the first term absent from the mapping.
pub fn map_through<S: AsRef<str>>(
    terms: &[S],
    values: &HashMap<String, f64>,
) -> Result<Vec<f64>, ValueError> {
    terms
        .iter()
        .map(|term| {
            let term = term.as_ref();
            values
                .get(term)
                .copied()
                .ok_or_else(|| ValueError::UnknownTerm(term.to_string()))
        })
        .collect()
}
