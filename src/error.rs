use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Every way loading or plotting an ECG series can fail.
/// None of these are recovered, the binary reports them and exits.
#[derive(Debug, Error)]
pub enum EcgError {
    #[error("could not open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("expected a metadata and a header line, found {found} line(s)")]
    MalformedHeader { found: usize },
    #[error("line {line}, column {column}: {reason}")]
    RowParse {
        line: usize,
        column: usize,
        reason: String,
    },
    #[error("could not read record at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: csv::Error,
    },
    #[error("failed to render svg: {0}")]
    Svg(String),
    #[error("failed to open the viewer: {0}")]
    Viewer(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for EcgError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        EcgError::Svg(e.to_string())
    }
}
