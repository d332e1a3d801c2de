use thiserror::Error;

/// Boxed cause attached to a conversion failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, ConversionError>;

/// A conversion that failed under strict stringency.
#[derive(Debug, Error)]
#[error("could not convert {source_type} to {target_type}: {message} (value: {})", .value.as_deref().unwrap_or("null"))]
pub struct ConversionError {
    pub source_type: String,
    pub target_type: String,
    /// Offending value rendered with `Debug`, `None` when the value was absent.
    pub value: Option<String>,
    pub message: String,
    #[source]
    pub cause: Option<BoxError>,
}

/// Malformed CIGAR text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CigarParseError {
    #[error("expected operation length at offset {offset}")]
    MissingLength { offset: usize },

    #[error("operation length at offset {offset} is not followed by an operation")]
    MissingOperation { offset: usize },

    #[error("unknown operation '{op}' at offset {offset}, expected one of MIDNSHP=X")]
    UnknownOperation { op: char, offset: usize },

    #[error("operation length '{length}' at offset {offset} must be a positive 32-bit integer")]
    InvalidLength { length: String, offset: usize },
}

/// Converter graph could not be assembled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("required converter '{name}' was not provided")]
    MissingConverter { name: &'static str },
}
