pub mod cigar;
pub mod feature;
pub mod read;

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use protobuf::MessageFull;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads one native record from a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Output file when given, stdout otherwise.
pub fn open_output(output_file: Option<&str>) -> Result<Box<dyn Write>> {
    match output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

pub fn write_message<M: MessageFull>(
    message: &M,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            write!(writer, "{}", protobuf::text_format::print_to_string_pretty(message))?;
        }
        OutputFormat::Json => {
            let json = protobuf_json_mapping::print_to_string(message)
                .context("Failed to encode message as JSON")?;
            writeln!(writer, "{}", json)?;
        }
        OutputFormat::Binary => {
            message
                .write_to_writer(writer)
                .context("Failed to encode message")?;
        }
    }
    writer.flush()?;
    Ok(())
}
