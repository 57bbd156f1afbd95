use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::GrowthError;
use crate::models::GrowthSeries;

/// Write a growth series to an Excel (.xlsx) file.
///
/// N is stored as a number with three decimals; overflowed values are
/// written as text since Excel cannot hold infinities.
pub fn write_excel(series: &GrowthSeries, path: impl AsRef<Path>) -> Result<(), GrowthError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header = Format::new().set_bold();
    let value_format = Format::new().set_num_format("0.000");

    worksheet.write_string_with_format(0, 0, "t", &header)?;
    worksheet.write_string_with_format(0, 1, "N", &header)?;

    for (i, point) in series.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_number(row, 0, point.t as f64)?;
        if point.n.is_finite() {
            worksheet.write_number_with_format(row, 1, point.n, &value_format)?;
        } else {
            worksheet.write_string(row, 1, point.n.to_string())?;
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}
