use crate::converter::Converter;
use crate::error::Result;
use crate::formats;
use crate::ga4gh::{self, UNRECOGNIZED_STRAND};
use crate::stringency::{warn_or_throw, ConversionStringency};
use log::Log;
use protobuf::EnumOrUnknown;

/// Native strand to interchange strand.
///
/// `INDEPENDENT` has no interchange counterpart and is written as an
/// unrecognized enum value, which reads back as `INDEPENDENT`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrandToGa4ghStrand;

impl Converter<formats::Strand, EnumOrUnknown<ga4gh::Strand>> for StrandToGa4ghStrand {
    fn convert(
        &self,
        source: Option<&formats::Strand>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<EnumOrUnknown<ga4gh::Strand>>> {
        let Some(strand) = source else {
            warn_or_throw::<formats::Strand, ga4gh::Strand>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        };

        let strand = match strand {
            formats::Strand::Forward => ga4gh::Strand::POS_STRAND.into(),
            formats::Strand::Reverse => ga4gh::Strand::NEG_STRAND.into(),
            formats::Strand::Independent => EnumOrUnknown::from_i32(UNRECOGNIZED_STRAND),
            formats::Strand::Unknown => ga4gh::Strand::STRAND_UNSPECIFIED.into(),
        };
        Ok(Some(strand))
    }
}

/// Interchange strand to native strand.
///
/// Any enum number outside the declared set is unrecognized and reads as
/// `INDEPENDENT`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ga4ghStrandToStrand;

impl Converter<EnumOrUnknown<ga4gh::Strand>, formats::Strand> for Ga4ghStrandToStrand {
    fn convert(
        &self,
        source: Option<&EnumOrUnknown<ga4gh::Strand>>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<formats::Strand>> {
        let Some(strand) = source else {
            warn_or_throw::<ga4gh::Strand, formats::Strand>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        };

        let strand = match strand.enum_value() {
            Ok(ga4gh::Strand::POS_STRAND) => formats::Strand::Forward,
            Ok(ga4gh::Strand::NEG_STRAND) => formats::Strand::Reverse,
            Err(_) => formats::Strand::Independent,
            Ok(ga4gh::Strand::STRAND_UNSPECIFIED) => formats::Strand::Unknown,
        };
        Ok(Some(strand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stringency::testing::CapturingLogger;

    fn to_ga4gh(strand: formats::Strand) -> EnumOrUnknown<ga4gh::Strand> {
        let logger = CapturingLogger::default();
        StrandToGa4ghStrand
            .convert(Some(&strand), ConversionStringency::Strict, &logger)
            .unwrap()
            .unwrap()
    }

    fn from_ga4gh(strand: EnumOrUnknown<ga4gh::Strand>) -> formats::Strand {
        let logger = CapturingLogger::default();
        Ga4ghStrandToStrand
            .convert(Some(&strand), ConversionStringency::Strict, &logger)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_to_ga4gh() {
        assert_eq!(to_ga4gh(formats::Strand::Forward), ga4gh::Strand::POS_STRAND.into());
        assert_eq!(to_ga4gh(formats::Strand::Reverse), ga4gh::Strand::NEG_STRAND.into());
        assert_eq!(to_ga4gh(formats::Strand::Unknown), ga4gh::Strand::STRAND_UNSPECIFIED.into());
        assert_eq!(to_ga4gh(formats::Strand::Independent).value(), UNRECOGNIZED_STRAND);
        assert!(to_ga4gh(formats::Strand::Independent).enum_value().is_err());
    }

    #[test]
    fn test_from_ga4gh() {
        assert_eq!(from_ga4gh(ga4gh::Strand::POS_STRAND.into()), formats::Strand::Forward);
        assert_eq!(from_ga4gh(ga4gh::Strand::NEG_STRAND.into()), formats::Strand::Reverse);
        assert_eq!(from_ga4gh(ga4gh::Strand::STRAND_UNSPECIFIED.into()), formats::Strand::Unknown);
        assert_eq!(
            from_ga4gh(EnumOrUnknown::from_i32(UNRECOGNIZED_STRAND)),
            formats::Strand::Independent
        );
        assert_eq!(from_ga4gh(EnumOrUnknown::from_i32(17)), formats::Strand::Independent);
    }

    #[test]
    fn test_null_ladder() {
        let logger = CapturingLogger::default();
        assert!(StrandToGa4ghStrand
            .convert(None, ConversionStringency::Strict, &logger)
            .is_err());
        assert!(Ga4ghStrandToStrand
            .convert(None, ConversionStringency::Strict, &logger)
            .is_err());
        assert!(Ga4ghStrandToStrand
            .convert(None, ConversionStringency::Lenient, &logger)
            .unwrap()
            .is_none());
        assert!(StrandToGa4ghStrand
            .convert(None, ConversionStringency::Silent, &logger)
            .unwrap()
            .is_none());
        assert_eq!(logger.warnings().len(), 1);
    }
}
