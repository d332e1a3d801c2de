use crate::convert::{decode_cigar, encode_cigar};
use crate::ga4gh::CigarUnit;
use crate::registry::ConverterRegistry;
use crate::stringency::{warn_or_throw, ConversionStringency};
use anyhow::Result;
use log::Log;
use protobuf::EnumFull;
use rust_htslib::bam::record::CigarString;
use std::io::{self, Write};

/// Decoded units and the text re-encoded from them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CigarReport {
    pub units: Vec<CigarUnit>,
    pub encoded: String,
}

pub fn convert_text(
    registry: &ConverterRegistry,
    text: &str,
    stringency: ConversionStringency,
    logger: &dyn Log,
) -> Result<CigarReport> {
    let decoded = match decode_cigar(text) {
        Ok(decoded) => decoded,
        Err(e) => {
            let message = format!("could not decode cigar, caught {}", e);
            warn_or_throw::<str, CigarString>(
                Some(text),
                &message,
                Some(Box::new(e)),
                stringency,
                logger,
            )?;
            return Ok(CigarReport::default());
        }
    };

    let units = registry
        .cigar_to_cigar_units
        .convert(Some(&decoded), stringency, logger)?
        .unwrap_or_default();
    let encoded = registry
        .cigar_units_to_cigar
        .convert(Some(units.as_slice()), stringency, logger)?
        .map(|cigar| encode_cigar(&cigar))
        .unwrap_or_default();

    Ok(CigarReport { units, encoded })
}

pub fn write_report(report: &CigarReport, writer: &mut dyn Write) -> Result<()> {
    for unit in &report.units {
        let operation = match unit.operation.enum_value() {
            Ok(op) => op.descriptor().name().to_string(),
            Err(n) => n.to_string(),
        };
        writeln!(writer, "{}\t{}", unit.operation_length, operation)?;
    }
    writeln!(writer, "cigar\t{}", report.encoded)?;
    Ok(())
}

pub fn run(cigar: String, stringency: ConversionStringency) -> Result<()> {
    let registry = ConverterRegistry::default();
    let report = convert_text(&registry, &cigar, stringency, log::logger())?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&report, &mut handle)
}
