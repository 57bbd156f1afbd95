mod csv_io;
mod excel_io;
mod json_io;

use std::path::Path;

use crate::analysis::SeriesSummary;
use crate::error::GrowthError;
use crate::models::{GrowthParameters, GrowthSeries};

pub use csv_io::{series_to_csv_bytes, write_csv};
pub use excel_io::write_excel;
pub use json_io::{series_to_json, write_json, SeriesDocument};

/// Trait for exporting a generated series to a file.
pub trait SeriesWriter {
    fn write(
        &self,
        params: &GrowthParameters,
        series: &GrowthSeries,
        path: &Path,
    ) -> Result<(), GrowthError>;
}

/// CSV format writer.
pub struct CsvFormat;

impl SeriesWriter for CsvFormat {
    fn write(
        &self,
        _params: &GrowthParameters,
        series: &GrowthSeries,
        path: &Path,
    ) -> Result<(), GrowthError> {
        write_csv(series, path)
    }
}

/// JSON format writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl SeriesWriter for JsonFormat {
    fn write(
        &self,
        params: &GrowthParameters,
        series: &GrowthSeries,
        path: &Path,
    ) -> Result<(), GrowthError> {
        let summary = SeriesSummary::compute(params, series);
        let doc = SeriesDocument {
            parameters: params,
            summary: &summary,
            points: series.points(),
        };
        write_json(&doc, path, self.pretty)
    }
}

/// Excel (.xlsx) format writer.
pub struct ExcelFormat;

impl SeriesWriter for ExcelFormat {
    fn write(
        &self,
        _params: &GrowthParameters,
        series: &GrowthSeries,
        path: &Path,
    ) -> Result<(), GrowthError> {
        write_excel(series, path)
    }
}

/// Pick a writer from a file extension (`csv`, `json`, `xlsx`).
pub fn writer_for_path(path: &Path, pretty: bool) -> Result<Box<dyn SeriesWriter>, GrowthError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => Ok(Box::new(CsvFormat)),
        "json" => Ok(Box::new(JsonFormat { pretty })),
        "xlsx" => Ok(Box::new(ExcelFormat)),
        _ => Err(GrowthError::InvalidArgument(format!(
            "Unsupported output format: .{ext}. Use .csv, .json, or .xlsx"
        ))),
    }
}
