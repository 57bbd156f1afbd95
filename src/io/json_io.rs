use std::path::Path;

use serde::Serialize;

use crate::analysis::SeriesSummary;
use crate::error::GrowthError;
use crate::models::{GrowthParameters, GrowthPoint};

/// Self-describing JSON document: inputs, headline figures, and every point.
///
/// Non-finite populations serialize as the strings `inf`, `-inf`, or `NaN`.
#[derive(Debug, Serialize)]
pub struct SeriesDocument<'a> {
    pub parameters: &'a GrowthParameters,
    pub summary: &'a SeriesSummary,
    pub points: &'a [GrowthPoint],
}

/// Serialize a series document to a JSON string.
pub fn series_to_json(doc: &SeriesDocument<'_>, pretty: bool) -> Result<String, GrowthError> {
    let content = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(content)
}

/// Write a series document to a JSON file.
pub fn write_json(
    doc: &SeriesDocument<'_>,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), GrowthError> {
    std::fs::write(path.as_ref(), series_to_json(doc, pretty)?)?;
    Ok(())
}
