pub mod alignment;
pub mod cigar;
pub mod feature;
pub mod ontology;
pub mod strand;

pub use alignment::AlignmentRecordToReadAlignment;
pub use cigar::{
    decode_cigar, encode_cigar, CigarOpToOperation, CigarToCigarUnits, CigarUnitToCigarOp,
    CigarUnitsToCigar,
};
pub use feature::FeatureToGa4ghFeature;
pub use ontology::{
    FeatureTypeToOntologyTerm, Ga4ghOntologyTermToOntologyTerm, OntologyTermToGa4ghOntologyTerm,
};
pub use strand::{Ga4ghStrandToStrand, StrandToGa4ghStrand};
