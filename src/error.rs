use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Workbook contains no sheets")]
    NoSheets,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("{0} support is not compiled in. Rebuild with: cargo build --features {0}")]
    FeatureDisabled(&'static str),

    #[error("Server error: {0}")]
    Server(String),
}
