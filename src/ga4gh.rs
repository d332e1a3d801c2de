//! Interchange record schema, generated from `proto/ga4gh` by the build script.

pub use crate::generated::common::{OntologyTerm, Position, Strand};
pub use crate::generated::read_service::SearchReadsResponse;
pub use crate::generated::reads::cigar_unit::Operation;
pub use crate::generated::reads::{CigarUnit, LinearAlignment, ReadAlignment};
pub use crate::generated::sequence_annotations::Feature;

/// Enum number written for a strand with no declared interchange value.
pub const UNRECOGNIZED_STRAND: i32 = -1;
