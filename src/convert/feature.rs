use crate::converter::Converter;
use crate::error::Result;
use crate::formats;
use crate::ga4gh;
use crate::stringency::{resolve, warn_or_throw, ConversionStringency};
use log::Log;
use protobuf::{EnumOrUnknown, MessageField};
use std::sync::Arc;

/// Native feature to interchange feature.
pub struct FeatureToGa4ghFeature {
    feature_type_converter: Arc<dyn Converter<str, ga4gh::OntologyTerm>>,
    strand_converter: Arc<dyn Converter<formats::Strand, EnumOrUnknown<ga4gh::Strand>>>,
}

impl FeatureToGa4ghFeature {
    pub fn new(
        feature_type_converter: Arc<dyn Converter<str, ga4gh::OntologyTerm>>,
        strand_converter: Arc<dyn Converter<formats::Strand, EnumOrUnknown<ga4gh::Strand>>>,
    ) -> Self {
        Self {
            feature_type_converter,
            strand_converter,
        }
    }
}

impl Converter<formats::Feature, ga4gh::Feature> for FeatureToGa4ghFeature {
    fn convert(
        &self,
        source: Option<&formats::Feature>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<ga4gh::Feature>> {
        let Some(feature) = source else {
            warn_or_throw::<formats::Feature, ga4gh::Feature>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        };

        let mut converted = ga4gh::Feature::new();
        converted.start = match feature.start {
            Some(start) => start,
            None => resolve::<formats::Feature, ga4gh::Feature, _>(
                0,
                Some(feature),
                "start must not be null",
                None,
                stringency,
                logger,
            )?,
        };
        converted.end = match feature.end {
            Some(end) => end,
            None => resolve::<formats::Feature, ga4gh::Feature, _>(
                0,
                Some(feature),
                "end must not be null",
                None,
                stringency,
                logger,
            )?,
        };
        converted.reference_name = feature.contig_name.clone().unwrap_or_default();

        // Sub-converters run their own null ladder; a lenient miss keeps the
        // interchange default.
        if let Some(strand) =
            self.strand_converter
                .convert(feature.strand.as_ref(), stringency, logger)?
        {
            converted.strand = strand;
        }
        if let Some(feature_type) =
            self.feature_type_converter
                .convert(feature.feature_type.as_deref(), stringency, logger)?
        {
            converted.feature_type = MessageField::some(feature_type);
        }

        Ok(Some(converted))
    }
}
