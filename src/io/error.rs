use super::Listing;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {listing} listing: {details} (at line {line})")]
    Parse {
        listing: Listing,
        line: usize,
        details: String,
    },
}

impl Error {
    pub fn parse(listing: Listing, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            listing,
            line,
            details: details.into(),
        }
    }
}
