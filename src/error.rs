use thiserror::Error;

/// Errors that can occur while generating, rendering, or exporting a growth series.
#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<rust_xlsxwriter::XlsxError> for GrowthError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        GrowthError::Excel(e.to_string())
    }
}

impl From<toml::de::Error> for GrowthError {
    fn from(e: toml::de::Error) -> Self {
        GrowthError::Config(e.to_string())
    }
}
