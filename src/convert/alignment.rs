//! Native aligned reads to interchange read alignments.

use crate::convert::cigar::decode_cigar;
use crate::converter::Converter;
use crate::error::Result;
use crate::formats::AlignmentRecord;
use crate::ga4gh::{self, CigarUnit, LinearAlignment, Position, ReadAlignment};
use crate::stringency::{resolve, warn_or_throw, ConversionStringency};
use log::Log;
use protobuf::MessageField;
use rust_htslib::bam::record::CigarString;
use std::sync::Arc;

/// Read group id used when the record carries none.
pub const DEFAULT_READ_GROUP_ID: &str = "1";

/// ASCII offset of Phred+33 quality strings.
pub const PHRED_OFFSET: i32 = 33;

/// Interchange strand for a negative-strand flag.
///
/// Reads and mates only carry a flag, so they can never be unspecified or
/// unrecognized. This does not go through the general strand mapper.
pub fn strand_from_flag(negative_strand: bool) -> ga4gh::Strand {
    if negative_strand {
        ga4gh::Strand::NEG_STRAND
    } else {
        ga4gh::Strand::POS_STRAND
    }
}

/// Decodes Phred+33 text to quality scores. Characters are not range checked.
pub fn decode_quality(qual: &str) -> Vec<i32> {
    qual.chars().map(|c| c as i32 - PHRED_OFFSET).collect()
}

fn position(reference_name: &str, position: i64, negative_strand: bool) -> Position {
    let mut pos = Position::new();
    pos.reference_name = reference_name.to_string();
    pos.position = position;
    pos.strand = strand_from_flag(negative_strand).into();
    pos
}

pub struct AlignmentRecordToReadAlignment {
    cigar_converter: Arc<dyn Converter<CigarString, Vec<CigarUnit>>>,
}

impl AlignmentRecordToReadAlignment {
    pub fn new(cigar_converter: Arc<dyn Converter<CigarString, Vec<CigarUnit>>>) -> Self {
        Self { cigar_converter }
    }

    /// Decodes and converts the CIGAR of a mapped read. A CIGAR that cannot be
    /// decoded yields an empty unit list unless the stringency is strict.
    fn convert_cigar(
        &self,
        cigar: Option<&str>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Vec<CigarUnit>> {
        let text = cigar.unwrap_or("");
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
                return Ok(Vec::new());
            }
        };

        Ok(self
            .cigar_converter
            .convert(Some(&decoded), stringency, logger)?
            .unwrap_or_default())
    }

    fn convert_alignment(
        &self,
        record: &AlignmentRecord,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<LinearAlignment> {
        let contig_name = match record.contig_name.as_deref() {
            Some(name) => name,
            None => resolve::<AlignmentRecord, Position, _>(
                "",
                Some(record),
                "mapped read must have a contigName",
                None,
                stringency,
                logger,
            )?,
        };
        let start = match record.start {
            Some(start) => start,
            None => resolve::<AlignmentRecord, Position, _>(
                0,
                Some(record),
                "mapped read must have a start",
                None,
                stringency,
                logger,
            )?,
        };

        let mut alignment = LinearAlignment::new();
        alignment.position = MessageField::some(position(
            contig_name,
            start,
            record.is_read_negative_strand(),
        ));
        alignment.mapping_quality = record.mapq.unwrap_or(0);
        alignment.cigar = self.convert_cigar(record.cigar.as_deref(), stringency, logger)?;
        Ok(alignment)
    }
}

impl Converter<AlignmentRecord, ReadAlignment> for AlignmentRecordToReadAlignment {
    fn convert(
        &self,
        source: Option<&AlignmentRecord>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<ReadAlignment>> {
        let Some(record) = source else {
            warn_or_throw::<AlignmentRecord, ReadAlignment>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        };

        let mut read = ReadAlignment::new();
        read.aligned_sequence = record.sequence.clone().unwrap_or_default();
        read.duplicate_fragment = record.is_duplicate_read();
        read.failed_vendor_quality_checks = record.is_failed_vendor_quality_checks();
        read.fragment_name = record.read_name.clone().unwrap_or_default();
        read.improper_placement = !record.is_proper_pair();
        read.number_reads = if record.is_read_paired() { 2 } else { 1 };
        read.read_group_id = match record.record_group_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_READ_GROUP_ID.to_string(),
        };
        read.read_number = record.read_in_fragment.unwrap_or(0);
        read.secondary_alignment = record.is_secondary_alignment();
        read.supplementary_alignment = record.is_supplementary_alignment();

        if let Some(insert_size) = record.inferred_insert_size {
            match i32::try_from(insert_size) {
                Ok(fragment_length) => read.fragment_length = fragment_length,
                Err(e) => warn_or_throw::<i64, i32>(
                    Some(&insert_size),
                    "inferredInsertSize does not fit a fragment length",
                    Some(Box::new(e)),
                    stringency,
                    logger,
                )?,
            }
        }

        if let Some(mate_contig_name) = record.mate_contig_name.as_deref() {
            let mate_start = match record.mate_alignment_start {
                Some(start) => start,
                None => resolve::<AlignmentRecord, Position, _>(
                    0,
                    Some(record),
                    "mateAlignmentStart must be set with mateContigName",
                    None,
                    stringency,
                    logger,
                )?,
            };
            read.next_mate_position = MessageField::some(position(
                mate_contig_name,
                mate_start,
                record.is_mate_negative_strand(),
            ));
        }

        if let Some(qual) = record.qual.as_deref() {
            read.aligned_quality = decode_quality(qual);
        }

        if record.is_read_mapped() {
            let alignment = self.convert_alignment(record, stringency, logger)?;
            read.alignment = MessageField::some(alignment);
        }

        Ok(Some(read))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::cigar::{CigarOpToOperation, CigarToCigarUnits};
    use crate::ga4gh::Operation;
    use crate::stringency::testing::CapturingLogger;

    fn converter() -> AlignmentRecordToReadAlignment {
        AlignmentRecordToReadAlignment::new(Arc::new(CigarToCigarUnits::new(Arc::new(
            CigarOpToOperation,
        ))))
    }

    fn mapped_record() -> AlignmentRecord {
        AlignmentRecord {
            read_name: Some("read0".to_string()),
            start: Some(10),
            read_mapped: Some(true),
            cigar: Some("10M".to_string()),
            sequence: Some("AAAAAAAAAA".to_string()),
            qual: Some("**********".to_string()),
            read_negative_strand: Some(false),
            mapq: Some(60),
            record_group_name: Some("rg1".to_string()),
            contig_name: Some("myCtg".to_string()),
            proper_pair: Some(true),
            mate_contig_name: Some("myCtg".to_string()),
            mate_negative_strand: Some(false),
            mate_alignment_start: Some(100),
            mate_mapped: Some(true),
            read_paired: Some(true),
            inferred_insert_size: Some(200),
            ..Default::default()
        }
    }

    #[test]
    fn test_convert() {
        let logger = CapturingLogger::default();
        let read = converter()
            .convert(Some(&mapped_record()), ConversionStringency::Strict, &logger)
            .unwrap()
            .unwrap();

        let alignment = read.alignment.as_ref().unwrap();
        assert_eq!(alignment.position.position, 10);
        assert_eq!(alignment.position.reference_name, "myCtg");
        assert_eq!(alignment.position.strand.enum_value(), Ok(ga4gh::Strand::POS_STRAND));
        assert_eq!(alignment.mapping_quality, 60);
        assert_eq!(alignment.cigar.len(), 1);
        assert_eq!(alignment.cigar[0].operation.enum_value(), Ok(Operation::ALIGNMENT_MATCH));
        assert_eq!(alignment.cigar[0].operation_length, 10);

        assert_eq!(read.read_group_id, "rg1");
        assert_eq!(read.fragment_name, "read0");
        assert!(!read.improper_placement);
        assert!(!read.duplicate_fragment);
        assert!(!read.failed_vendor_quality_checks);
        assert!(!read.secondary_alignment);
        assert!(!read.supplementary_alignment);
        assert_eq!(read.next_mate_position.reference_name, "myCtg");
        assert_eq!(read.next_mate_position.position, 100);
        assert_eq!(read.number_reads, 2);
        assert_eq!(read.fragment_length, 200);
        assert_eq!(read.aligned_sequence, "AAAAAAAAAA");
        assert_eq!(read.aligned_quality, vec![9; 10]);
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn test_decode_quality() {
        assert_eq!(decode_quality("!+5I"), vec![0, 10, 20, 40]);
        assert!(decode_quality("").is_empty());
    }

    #[test]
    fn test_strand_from_flag() {
        assert_eq!(strand_from_flag(true), ga4gh::Strand::NEG_STRAND);
        assert_eq!(strand_from_flag(false), ga4gh::Strand::POS_STRAND);
    }

    #[test]
    fn test_insert_size_overflow() {
        let logger = CapturingLogger::default();
        let record = AlignmentRecord {
            inferred_insert_size: Some(i64::from(i32::MAX) + 1),
            ..mapped_record()
        };
        let err = converter()
            .convert(Some(&record), ConversionStringency::Strict, &logger)
            .unwrap_err();
        assert!(err.message.contains("inferredInsertSize"));

        let read = converter()
            .convert(Some(&record), ConversionStringency::Lenient, &logger)
            .unwrap()
            .unwrap();
        assert_eq!(read.fragment_length, 0);
        assert_eq!(logger.warnings().len(), 1);
    }

    #[test]
    fn test_mapped_read_missing_position() {
        let logger = CapturingLogger::default();
        let record = AlignmentRecord {
            contig_name: None,
            start: None,
            ..mapped_record()
        };
        assert!(converter()
            .convert(Some(&record), ConversionStringency::Strict, &logger)
            .is_err());

        let read = converter()
            .convert(Some(&record), ConversionStringency::Lenient, &logger)
            .unwrap()
            .unwrap();
        let position = &read.alignment.position;
        assert_eq!(position.reference_name, "");
        assert_eq!(position.position, 0);
        // One warning per missing field.
        assert_eq!(logger.warnings().len(), 2);
    }

    #[test]
    fn test_mate_without_start() {
        let logger = CapturingLogger::default();
        let record = AlignmentRecord {
            mate_alignment_start: None,
            ..mapped_record()
        };
        let read = converter()
            .convert(Some(&record), ConversionStringency::Silent, &logger)
            .unwrap()
            .unwrap();
        assert_eq!(read.next_mate_position.position, 0);
        assert_eq!(read.next_mate_position.reference_name, "myCtg");
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn test_cigar_placeholder() {
        let logger = CapturingLogger::default();
        let record = AlignmentRecord {
            cigar: Some("*".to_string()),
            ..mapped_record()
        };
        let read = converter()
            .convert(Some(&record), ConversionStringency::Strict, &logger)
            .unwrap()
            .unwrap();
        assert!(read.alignment.is_some());
        assert!(read.alignment.cigar.is_empty());
    }
}
