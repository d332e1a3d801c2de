use crate::commands::{open_output, read_json, write_message};
use crate::config::OutputFormat;
use crate::formats;
use crate::ga4gh;
use crate::registry::ConverterRegistry;
use crate::stringency::ConversionStringency;
use anyhow::Result;
use log::Log;
use std::path::Path;

pub fn convert_file(
    registry: &ConverterRegistry,
    record_file: &Path,
    stringency: ConversionStringency,
    logger: &dyn Log,
) -> Result<Option<ga4gh::Feature>> {
    let feature: Option<formats::Feature> = read_json(record_file)?;
    Ok(registry
        .feature_to_ga4gh_feature
        .convert(feature.as_ref(), stringency, logger)?)
}

pub fn run(
    record_file: String,
    stringency: ConversionStringency,
    format: OutputFormat,
    output_file: Option<String>,
) -> Result<()> {
    let registry = ConverterRegistry::default();
    if let Some(feature) =
        convert_file(&registry, Path::new(&record_file), stringency, log::logger())?
    {
        let mut writer = open_output(output_file.as_deref())?;
        write_message(&feature, format, &mut writer)?;
    }
    Ok(())
}
