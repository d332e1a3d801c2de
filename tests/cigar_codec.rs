mod common;

use common::CapturingLogger;
use ga4gh_convert::convert::{decode_cigar, encode_cigar};
use ga4gh_convert::ga4gh::{CigarUnit, Operation};
use ga4gh_convert::{CigarParseError, ConversionStringency, ConverterRegistry};
use proptest::prelude::*;
use rstest::rstest;

fn cigar_text() -> impl Strategy<Value = String> {
    prop::collection::vec((1u32..=100_000, prop::sample::select(b"MIDNSHP=X".to_vec())), 0..12)
        .prop_map(|ops| {
            ops.into_iter()
                .map(|(len, op)| format!("{}{}", len, op as char))
                .collect()
        })
}

proptest! {
    #[test]
    fn test_encode_decode_is_stable(text in cigar_text()) {
        let decoded = decode_cigar(&text).unwrap();
        let reencoded = encode_cigar(&decoded);
        prop_assert_eq!(&reencoded, &text);
        prop_assert_eq!(decode_cigar(&reencoded).unwrap(), decoded);
    }

    #[test]
    fn test_units_round_trip(text in cigar_text()) {
        let registry = ConverterRegistry::default();
        let logger = CapturingLogger::default();
        let decoded = decode_cigar(&text).unwrap();
        let units = registry
            .cigar_to_cigar_units
            .convert(Some(&decoded), ConversionStringency::Strict, &logger)
            .unwrap()
            .unwrap();
        prop_assert_eq!(units.len(), decoded.len());
        let back = registry
            .cigar_units_to_cigar
            .convert(Some(units.as_slice()), ConversionStringency::Strict, &logger)
            .unwrap()
            .unwrap();
        prop_assert_eq!(back, decoded);
    }

    #[test]
    fn test_decode_never_panics(text in "[0-9MIDNSHP=XZ*]{0,16}") {
        let _ = decode_cigar(&text);
    }
}

#[rstest]
#[case("10", CigarParseError::MissingOperation { offset: 0 })]
#[case("M", CigarParseError::MissingLength { offset: 0 })]
#[case("5M3", CigarParseError::MissingOperation { offset: 2 })]
#[case("5Z", CigarParseError::UnknownOperation { op: 'Z', offset: 1 })]
#[case("0M", CigarParseError::InvalidLength { length: "0".to_string(), offset: 0 })]
#[case("99999999999M", CigarParseError::InvalidLength { length: "99999999999".to_string(), offset: 0 })]
fn test_ill_formed(#[case] text: &str, #[case] expected: CigarParseError) {
    assert_eq!(decode_cigar(text).unwrap_err(), expected);
}

#[rstest]
#[case("")]
#[case("*")]
fn test_empty(#[case] text: &str) {
    assert!(decode_cigar(text).unwrap().is_empty());
}

#[test]
fn test_unspecified_unit_is_dropped_when_lenient() {
    let registry = ConverterRegistry::default();
    let logger = CapturingLogger::default();

    let mut good = CigarUnit::new();
    good.operation = Operation::ALIGNMENT_MATCH.into();
    good.operation_length = 4;
    let bad = CigarUnit::new();
    let units = vec![good, bad];

    assert!(registry
        .cigar_units_to_cigar
        .convert(Some(units.as_slice()), ConversionStringency::Strict, &logger)
        .is_err());

    let cigar = registry
        .cigar_units_to_cigar
        .convert(Some(units.as_slice()), ConversionStringency::Lenient, &logger)
        .unwrap()
        .unwrap();
    assert_eq!(encode_cigar(&cigar), "4M");
    assert_eq!(logger.warnings().len(), 1);
}
