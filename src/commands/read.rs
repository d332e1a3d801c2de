use crate::commands::{open_output, read_json, write_message};
use crate::config::OutputFormat;
use crate::formats::AlignmentRecord;
use crate::ga4gh::{ReadAlignment, SearchReadsResponse};
use crate::registry::ConverterRegistry;
use crate::stringency::ConversionStringency;
use anyhow::Result;
use log::Log;
use std::io::Write;
use std::path::Path;

pub fn convert_file(
    registry: &ConverterRegistry,
    record_file: &Path,
    stringency: ConversionStringency,
    logger: &dyn Log,
) -> Result<Option<ReadAlignment>> {
    // A `null` document is an absent record.
    let record: Option<AlignmentRecord> = read_json(record_file)?;
    let read = registry
        .alignment_record_to_read_alignment
        .convert(record.as_ref(), stringency, logger)?;
    Ok(read)
}

/// JSON output is a one-element search response, the other formats carry the
/// bare alignment.
pub fn write_read(read: ReadAlignment, format: OutputFormat, writer: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut response = SearchReadsResponse::new();
            response.alignments.push(read);
            write_message(&response, format, writer)
        }
        _ => write_message(&read, format, writer),
    }
}

pub fn run(
    record_file: String,
    stringency: ConversionStringency,
    format: OutputFormat,
    output_file: Option<String>,
) -> Result<()> {
    let registry = ConverterRegistry::default();
    let read = convert_file(&registry, Path::new(&record_file), stringency, log::logger())?;

    match read {
        Some(read) => {
            let mut writer = open_output(output_file.as_deref())?;
            write_read(read, format, &mut writer)
        }
        None => Ok(()),
    }
}
