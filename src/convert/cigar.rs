//! CIGAR text codec and operation mapping between the two schemas.
//!
//! Native CIGARs are `rust_htslib` values; interchange CIGARs are lists of
//! `CigarUnit` messages. The text form is a run of `<length><op>` tokens
//! over the alphabet `MIDNSHP=X`.

use crate::converter::Converter;
use crate::error::{CigarParseError, Result};
use crate::ga4gh::{CigarUnit, Operation};
use crate::stringency::{warn_or_throw, ConversionStringency};
use log::Log;
use rust_htslib::bam::record::{Cigar, CigarString};
use std::sync::Arc;

/// Parses CIGAR text. Empty text and the SAM `*` placeholder decode to an
/// empty CIGAR.
pub fn decode_cigar(text: &str) -> std::result::Result<CigarString, CigarParseError> {
    if text.is_empty() || text == "*" {
        return Ok(CigarString(Vec::new()));
    }

    let mut ops = Vec::new();
    let mut length_start = 0;
    let mut in_length = false;

    for (offset, c) in text.char_indices() {
        if c.is_ascii_digit() {
            if !in_length {
                length_start = offset;
                in_length = true;
            }
            continue;
        }

        if !in_length {
            return Err(CigarParseError::MissingLength { offset });
        }
        in_length = false;

        let digits = &text[length_start..offset];
        let length = digits
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| CigarParseError::InvalidLength {
                length: digits.to_string(),
                offset: length_start,
            })?;

        ops.push(match c {
            'M' => Cigar::Match(length),
            'I' => Cigar::Ins(length),
            'D' => Cigar::Del(length),
            'N' => Cigar::RefSkip(length),
            'S' => Cigar::SoftClip(length),
            'H' => Cigar::HardClip(length),
            'P' => Cigar::Pad(length),
            '=' => Cigar::Equal(length),
            'X' => Cigar::Diff(length),
            op => return Err(CigarParseError::UnknownOperation { op, offset }),
        });
    }

    if in_length {
        return Err(CigarParseError::MissingOperation {
            offset: length_start,
        });
    }

    Ok(CigarString(ops))
}

/// Writes `<length><op>` for each operation in order.
pub fn encode_cigar(cigar: &CigarString) -> String {
    cigar.to_string()
}

/// Maps a native CIGAR operation to its interchange operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct CigarOpToOperation;

impl Converter<Cigar, Operation> for CigarOpToOperation {
    fn convert(
        &self,
        source: Option<&Cigar>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<Operation>> {
        let Some(op) = source else {
            warn_or_throw::<Cigar, Operation>(None, "must not be null", None, stringency, logger)?;
            return Ok(None);
        };

        let operation = match op {
            Cigar::Match(_) => Operation::ALIGNMENT_MATCH,
            Cigar::Ins(_) => Operation::INSERT,
            Cigar::Del(_) => Operation::DELETE,
            Cigar::RefSkip(_) => Operation::SKIP,
            Cigar::SoftClip(_) => Operation::CLIP_SOFT,
            Cigar::HardClip(_) => Operation::CLIP_HARD,
            Cigar::Pad(_) => Operation::PAD,
            Cigar::Equal(_) => Operation::SEQUENCE_MATCH,
            Cigar::Diff(_) => Operation::SEQUENCE_MISMATCH,
        };
        Ok(Some(operation))
    }
}

/// Converts a decoded native CIGAR to interchange units.
pub struct CigarToCigarUnits {
    operation_converter: Arc<dyn Converter<Cigar, Operation>>,
}

impl CigarToCigarUnits {
    pub fn new(operation_converter: Arc<dyn Converter<Cigar, Operation>>) -> Self {
        Self {
            operation_converter,
        }
    }
}

impl Converter<CigarString, Vec<CigarUnit>> for CigarToCigarUnits {
    fn convert(
        &self,
        source: Option<&CigarString>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<Vec<CigarUnit>>> {
        let Some(cigar) = source else {
            warn_or_throw::<CigarString, Vec<CigarUnit>>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        };

        let mut units = Vec::with_capacity(cigar.len());
        for op in cigar.iter() {
            // Operations the mapper could not place are dropped.
            if let Some(operation) = self
                .operation_converter
                .convert(Some(op), stringency, logger)?
            {
                let mut unit = CigarUnit::new();
                unit.operation = operation.into();
                unit.operation_length = i64::from(op.len());
                units.push(unit);
            }
        }
        Ok(Some(units))
    }
}

/// Maps one interchange unit back to a native operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct CigarUnitToCigarOp;

impl Converter<CigarUnit, Cigar> for CigarUnitToCigarOp {
    fn convert(
        &self,
        source: Option<&CigarUnit>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<Cigar>> {
        let Some(unit) = source else {
            warn_or_throw::<CigarUnit, Cigar>(None, "must not be null", None, stringency, logger)?;
            return Ok(None);
        };

        let build: fn(u32) -> Cigar = match unit.operation.enum_value() {
            Ok(Operation::ALIGNMENT_MATCH) => Cigar::Match,
            Ok(Operation::INSERT) => Cigar::Ins,
            Ok(Operation::DELETE) => Cigar::Del,
            Ok(Operation::SKIP) => Cigar::RefSkip,
            Ok(Operation::CLIP_SOFT) => Cigar::SoftClip,
            Ok(Operation::CLIP_HARD) => Cigar::HardClip,
            Ok(Operation::PAD) => Cigar::Pad,
            Ok(Operation::SEQUENCE_MATCH) => Cigar::Equal,
            Ok(Operation::SEQUENCE_MISMATCH) => Cigar::Diff,
            Ok(Operation::OPERATION_UNSPECIFIED) | Err(_) => {
                warn_or_throw::<CigarUnit, Cigar>(
                    Some(unit),
                    "could not match operation",
                    None,
                    stringency,
                    logger,
                )?;
                return Ok(None);
            }
        };

        match u32::try_from(unit.operation_length) {
            Ok(length) if length > 0 => Ok(Some(build(length))),
            _ => {
                warn_or_throw::<CigarUnit, Cigar>(
                    Some(unit),
                    "operation length must be a positive 32-bit integer",
                    None,
                    stringency,
                    logger,
                )?;
                Ok(None)
            }
        }
    }
}

/// Converts interchange units back to a native CIGAR.
pub struct CigarUnitsToCigar {
    operation_converter: Arc<dyn Converter<CigarUnit, Cigar>>,
}

impl CigarUnitsToCigar {
    pub fn new(operation_converter: Arc<dyn Converter<CigarUnit, Cigar>>) -> Self {
        Self {
            operation_converter,
        }
    }
}

impl Converter<[CigarUnit], CigarString> for CigarUnitsToCigar {
    fn convert(
        &self,
        source: Option<&[CigarUnit]>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<CigarString>> {
        let Some(units) = source else {
            warn_or_throw::<[CigarUnit], CigarString>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        };

        let mut ops = Vec::with_capacity(units.len());
        for unit in units {
            if let Some(op) = self.operation_converter.convert(Some(unit), stringency, logger)? {
                ops.push(op);
            }
        }
        Ok(Some(CigarString(ops)))
    }
}
