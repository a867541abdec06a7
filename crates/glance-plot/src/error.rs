//! Error types for chart rendering

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The requested column does not exist in the DataFrame
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// The column exists but cannot be used for the requested chart
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// Invalid rendering parameter (bin count, dimensions, ...)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Polars error while reading the DataFrame
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Drawing backend failure
    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for Error {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Error::Render(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownColumn("revenue".to_string());
        assert_eq!(err.to_string(), "Unknown column: revenue");

        let err = Error::InvalidColumn("no numeric values in 'label'".to_string());
        assert_eq!(err.to_string(), "Invalid column: no numeric values in 'label'");

        let err = Error::InvalidParameter("bins must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: bins must be positive");

        let err = Error::Render("backend closed".to_string());
        assert_eq!(err.to_string(), "Render error: backend closed");
    }
}
