use thiserror::Error;

/// Failures while decoding a compact genome token stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    #[error("genome is empty, expected an element count")]
    MissingCount,

    #[error("invalid element count {token:?}")]
    InvalidCount { token: String },

    #[error("invalid codon {token:?} at position {index}")]
    InvalidCodon { index: usize, token: String },

    #[error("genome declares {declared} codons but carries {found}")]
    CountMismatch { declared: usize, found: usize },
}

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed archive: {0}")]
    Format(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
