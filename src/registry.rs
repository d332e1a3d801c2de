//! Wires record converters to the sub-converters they depend on.

use crate::convert::{
    AlignmentRecordToReadAlignment, CigarOpToOperation, CigarToCigarUnits, CigarUnitToCigarOp,
    CigarUnitsToCigar, FeatureToGa4ghFeature, FeatureTypeToOntologyTerm,
    Ga4ghOntologyTermToOntologyTerm, Ga4ghStrandToStrand, OntologyTermToGa4ghOntologyTerm,
    StrandToGa4ghStrand,
};
use crate::converter::Converter;
use crate::error::RegistryError;
use crate::formats;
use crate::ga4gh::{self, CigarUnit, Operation};
use protobuf::EnumOrUnknown;
use rust_htslib::bam::record::{Cigar, CigarString};
use std::sync::Arc;

pub type CigarOpConverter = Arc<dyn Converter<Cigar, Operation>>;
pub type CigarUnitOpConverter = Arc<dyn Converter<CigarUnit, Cigar>>;
pub type CigarConverter = Arc<dyn Converter<CigarString, Vec<CigarUnit>>>;
pub type CigarUnitsConverter = Arc<dyn Converter<[CigarUnit], CigarString>>;
pub type StrandConverter = Arc<dyn Converter<formats::Strand, EnumOrUnknown<ga4gh::Strand>>>;
pub type Ga4ghStrandConverter = Arc<dyn Converter<EnumOrUnknown<ga4gh::Strand>, formats::Strand>>;
pub type FeatureTypeConverter = Arc<dyn Converter<str, ga4gh::OntologyTerm>>;
pub type OntologyTermConverter = Arc<dyn Converter<formats::OntologyTerm, ga4gh::OntologyTerm>>;
pub type Ga4ghOntologyTermConverter = Arc<dyn Converter<ga4gh::OntologyTerm, formats::OntologyTerm>>;
pub type ReadAlignmentConverter = Arc<dyn Converter<formats::AlignmentRecord, ga4gh::ReadAlignment>>;
pub type FeatureConverter = Arc<dyn Converter<formats::Feature, ga4gh::Feature>>;

/// Every converter of the crate, ready to share across threads.
#[derive(Clone)]
pub struct ConverterRegistry {
    pub cigar_op_to_operation: CigarOpConverter,
    pub cigar_unit_to_cigar_op: CigarUnitOpConverter,
    pub cigar_to_cigar_units: CigarConverter,
    pub cigar_units_to_cigar: CigarUnitsConverter,
    pub strand_to_ga4gh: StrandConverter,
    pub ga4gh_strand_to_strand: Ga4ghStrandConverter,
    pub feature_type_to_ontology_term: FeatureTypeConverter,
    pub ontology_term_to_ga4gh: OntologyTermConverter,
    pub ga4gh_ontology_term_to_ontology_term: Ga4ghOntologyTermConverter,
    pub alignment_record_to_read_alignment: ReadAlignmentConverter,
    pub feature_to_ga4gh_feature: FeatureConverter,
}

impl ConverterRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    fn wire(
        cigar_op_to_operation: CigarOpConverter,
        cigar_unit_to_cigar_op: CigarUnitOpConverter,
        strand_to_ga4gh: StrandConverter,
        ga4gh_strand_to_strand: Ga4ghStrandConverter,
        feature_type_to_ontology_term: FeatureTypeConverter,
        ontology_term_to_ga4gh: OntologyTermConverter,
        ga4gh_ontology_term_to_ontology_term: Ga4ghOntologyTermConverter,
    ) -> Self {
        let cigar_to_cigar_units: CigarConverter =
            Arc::new(CigarToCigarUnits::new(cigar_op_to_operation.clone()));
        let cigar_units_to_cigar: CigarUnitsConverter =
            Arc::new(CigarUnitsToCigar::new(cigar_unit_to_cigar_op.clone()));
        let alignment_record_to_read_alignment: ReadAlignmentConverter =
            Arc::new(AlignmentRecordToReadAlignment::new(cigar_to_cigar_units.clone()));
        let feature_to_ga4gh_feature: FeatureConverter = Arc::new(FeatureToGa4ghFeature::new(
            feature_type_to_ontology_term.clone(),
            strand_to_ga4gh.clone(),
        ));

        Self {
            cigar_op_to_operation,
            cigar_unit_to_cigar_op,
            cigar_to_cigar_units,
            cigar_units_to_cigar,
            strand_to_ga4gh,
            ga4gh_strand_to_strand,
            feature_type_to_ontology_term,
            ontology_term_to_ga4gh,
            ga4gh_ontology_term_to_ontology_term,
            alignment_record_to_read_alignment,
            feature_to_ga4gh_feature,
        }
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::wire(
            Arc::new(CigarOpToOperation),
            Arc::new(CigarUnitToCigarOp),
            Arc::new(StrandToGa4ghStrand),
            Arc::new(Ga4ghStrandToStrand),
            Arc::new(FeatureTypeToOntologyTerm),
            Arc::new(OntologyTermToGa4ghOntologyTerm),
            Arc::new(Ga4ghOntologyTermToOntologyTerm),
        )
    }
}

/// Collects leaf converters; record converters are composed in [`build`].
///
/// A builder starts empty. Missing leaves are reported by `build`, not at
/// first use.
///
/// [`build`]: RegistryBuilder::build
#[derive(Default)]
pub struct RegistryBuilder {
    cigar_op_to_operation: Option<CigarOpConverter>,
    cigar_unit_to_cigar_op: Option<CigarUnitOpConverter>,
    strand_to_ga4gh: Option<StrandConverter>,
    ga4gh_strand_to_strand: Option<Ga4ghStrandConverter>,
    feature_type_to_ontology_term: Option<FeatureTypeConverter>,
    ontology_term_to_ga4gh: Option<OntologyTermConverter>,
    ga4gh_ontology_term_to_ontology_term: Option<Ga4ghOntologyTermConverter>,
}

fn required<T>(slot: Option<T>, name: &'static str) -> Result<T, RegistryError> {
    slot.ok_or(RegistryError::MissingConverter { name })
}

impl RegistryBuilder {
    /// Fills every empty slot with the standard converter.
    pub fn with_defaults(mut self) -> Self {
        self.cigar_op_to_operation
            .get_or_insert_with(|| Arc::new(CigarOpToOperation));
        self.cigar_unit_to_cigar_op
            .get_or_insert_with(|| Arc::new(CigarUnitToCigarOp));
        self.strand_to_ga4gh
            .get_or_insert_with(|| Arc::new(StrandToGa4ghStrand));
        self.ga4gh_strand_to_strand
            .get_or_insert_with(|| Arc::new(Ga4ghStrandToStrand));
        self.feature_type_to_ontology_term
            .get_or_insert_with(|| Arc::new(FeatureTypeToOntologyTerm));
        self.ontology_term_to_ga4gh
            .get_or_insert_with(|| Arc::new(OntologyTermToGa4ghOntologyTerm));
        self.ga4gh_ontology_term_to_ontology_term
            .get_or_insert_with(|| Arc::new(Ga4ghOntologyTermToOntologyTerm));
        self
    }

    pub fn cigar_op_to_operation(mut self, converter: CigarOpConverter) -> Self {
        self.cigar_op_to_operation = Some(converter);
        self
    }

    pub fn cigar_unit_to_cigar_op(mut self, converter: CigarUnitOpConverter) -> Self {
        self.cigar_unit_to_cigar_op = Some(converter);
        self
    }

    pub fn strand_to_ga4gh(mut self, converter: StrandConverter) -> Self {
        self.strand_to_ga4gh = Some(converter);
        self
    }

    pub fn ga4gh_strand_to_strand(mut self, converter: Ga4ghStrandConverter) -> Self {
        self.ga4gh_strand_to_strand = Some(converter);
        self
    }

    pub fn feature_type_to_ontology_term(mut self, converter: FeatureTypeConverter) -> Self {
        self.feature_type_to_ontology_term = Some(converter);
        self
    }

    pub fn ontology_term_to_ga4gh(mut self, converter: OntologyTermConverter) -> Self {
        self.ontology_term_to_ga4gh = Some(converter);
        self
    }

    pub fn ga4gh_ontology_term_to_ontology_term(
        mut self,
        converter: Ga4ghOntologyTermConverter,
    ) -> Self {
        self.ga4gh_ontology_term_to_ontology_term = Some(converter);
        self
    }

    pub fn build(self) -> Result<ConverterRegistry, RegistryError> {
        Ok(ConverterRegistry::wire(
            required(self.cigar_op_to_operation, "cigar_op_to_operation")?,
            required(self.cigar_unit_to_cigar_op, "cigar_unit_to_cigar_op")?,
            required(self.strand_to_ga4gh, "strand_to_ga4gh")?,
            required(self.ga4gh_strand_to_strand, "ga4gh_strand_to_strand")?,
            required(
                self.feature_type_to_ontology_term,
                "feature_type_to_ontology_term",
            )?,
            required(self.ontology_term_to_ga4gh, "ontology_term_to_ga4gh")?,
            required(
                self.ga4gh_ontology_term_to_ontology_term,
                "ga4gh_ontology_term_to_ontology_term",
            )?,
        ))
    }
}
