use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving a plot session
#[derive(Error, Debug)]
pub enum PlotError {
    /// Error when writing a scratch data file
    #[error("Failed to write scratch file {}: {source}", path.display())]
    ScratchWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error when tick labels and explicit positions differ in count
    #[error("Tick labels and positions differ in count: {labels} labels, {positions} positions")]
    TickCountMismatch { labels: usize, positions: usize },
}

/// Result type alias for plot session operations
pub type Result<T> = std::result::Result<T, PlotError>;
