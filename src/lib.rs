pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod converter;
pub mod error;
pub mod formats;
pub mod ga4gh;
pub mod generated;
pub mod registry;
pub mod stringency;

pub use converter::Converter;
pub use error::{ConversionError, CigarParseError, RegistryError};
pub use registry::{ConverterRegistry, RegistryBuilder};
pub use stringency::ConversionStringency;
