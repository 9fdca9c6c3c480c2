use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("missing page element: `{id}`")]
    MissingElement { id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported file format: {0} (expected .csv, .xlsx or .xls)")]
    UnsupportedFormat(String),

    #[error("import failed: {0}")]
    Import(String),

    #[error("chart backend error: {0}")]
    Backend(String),
}

impl ChartError {
    pub(crate) fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
