use crate::converter::Converter;
use crate::error::Result;
use crate::formats;
use crate::ga4gh;
use crate::stringency::{warn_or_throw, ConversionStringency};
use log::Log;

/// Wraps a free-text feature type such as `exon` as an interchange term id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureTypeToOntologyTerm;

impl Converter<str, ga4gh::OntologyTerm> for FeatureTypeToOntologyTerm {
    fn convert(
        &self,
        source: Option<&str>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<ga4gh::OntologyTerm>> {
        let Some(feature_type) = source else {
            warn_or_throw::<str, ga4gh::OntologyTerm>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        };

        let mut term = ga4gh::OntologyTerm::new();
        term.term_id = feature_type.to_string();
        Ok(Some(term))
    }
}

/// Native namespace/accession term to an interchange term id.
///
/// Writes `db:accession` when both parts are present and the bare accession
/// when only the accession is.
#[derive(Debug, Default, Clone, Copy)]
pub struct OntologyTermToGa4ghOntologyTerm;

impl Converter<formats::OntologyTerm, ga4gh::OntologyTerm> for OntologyTermToGa4ghOntologyTerm {
    fn convert(
        &self,
        source: Option<&formats::OntologyTerm>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<ga4gh::OntologyTerm>> {
        let Some(term) = source else {
            warn_or_throw::<formats::OntologyTerm, ga4gh::OntologyTerm>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        };

        let mut converted = ga4gh::OntologyTerm::new();
        converted.term_id = match (term.db.as_deref(), term.accession.as_deref()) {
            (Some(db), Some(accession)) => format!("{}:{}", db, accession),
            (None, Some(accession)) => accession.to_string(),
            _ => String::new(),
        };
        Ok(Some(converted))
    }
}

/// Interchange term to native term.
///
/// A bare term id cannot be split into a namespace and an accession, so the
/// result is always the empty native term.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ga4ghOntologyTermToOntologyTerm;

impl Converter<ga4gh::OntologyTerm, formats::OntologyTerm> for Ga4ghOntologyTermToOntologyTerm {
    fn convert(
        &self,
        source: Option<&ga4gh::OntologyTerm>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<formats::OntologyTerm>> {
        if source.is_none() {
            warn_or_throw::<ga4gh::OntologyTerm, formats::OntologyTerm>(
                None,
                "must not be null",
                None,
                stringency,
                logger,
            )?;
            return Ok(None);
        }
        Ok(Some(formats::OntologyTerm::default()))
    }
}
