use std::io::Write;
use std::path::Path;

use crate::error::GrowthError;
use crate::models::GrowthSeries;

/// CSV row structure for one time step.
#[derive(Debug, serde::Serialize)]
struct SeriesRow {
    t: u32,
    #[serde(rename = "N")]
    n: f64,
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, series: &GrowthSeries) -> Result<(), GrowthError> {
    for point in series {
        wtr.serialize(SeriesRow {
            t: point.t,
            n: point.n,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a growth series to a CSV file with columns `t,N`.
pub fn write_csv(series: &GrowthSeries, path: impl AsRef<Path>) -> Result<(), GrowthError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    write_rows(&mut wtr, series)
}

/// Serialize a growth series to CSV bytes.
pub fn series_to_csv_bytes(series: &GrowthSeries) -> Result<Vec<u8>, GrowthError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_rows(&mut wtr, series)?;
    wtr.into_inner()
        .map_err(|e| GrowthError::Io(std::io::Error::other(e.to_string())))
}
