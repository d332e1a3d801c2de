//! Native record schema.
//!
//! Flat records where almost every field may be absent. Field names follow
//! the Avro schema, so records deserialize directly from their JSON encoding.

use serde::{Deserialize, Serialize};

/// Strand of a feature relative to the reference.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strand {
    Forward,
    Reverse,
    Independent,
    #[default]
    Unknown,
}

/// Ontology term as a namespace/accession pair, e.g. `SO` / `0000147`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OntologyTerm {
    pub db: Option<String>,
    pub accession: Option<String>,
}

impl OntologyTerm {
    pub fn is_empty(&self) -> bool {
        self.db.is_none() && self.accession.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AlignmentRecord {
    pub read_name: Option<String>,
    pub sequence: Option<String>,
    /// Phred+33 encoded base qualities.
    pub qual: Option<String>,
    pub contig_name: Option<String>,
    /// 0-based leftmost mapping position.
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub mapq: Option<i32>,
    pub cigar: Option<String>,
    pub read_mapped: Option<bool>,
    pub read_negative_strand: Option<bool>,
    pub mate_mapped: Option<bool>,
    pub mate_contig_name: Option<String>,
    pub mate_alignment_start: Option<i64>,
    pub mate_negative_strand: Option<bool>,
    pub read_paired: Option<bool>,
    pub proper_pair: Option<bool>,
    pub duplicate_read: Option<bool>,
    pub failed_vendor_quality_checks: Option<bool>,
    pub secondary_alignment: Option<bool>,
    pub supplementary_alignment: Option<bool>,
    pub inferred_insert_size: Option<i64>,
    pub record_group_name: Option<String>,
    pub read_in_fragment: Option<i32>,
}

// Absent flags carry the Avro default of false.
impl AlignmentRecord {
    pub fn is_read_mapped(&self) -> bool {
        self.read_mapped.unwrap_or(false)
    }

    pub fn is_read_negative_strand(&self) -> bool {
        self.read_negative_strand.unwrap_or(false)
    }

    pub fn is_mate_negative_strand(&self) -> bool {
        self.mate_negative_strand.unwrap_or(false)
    }

    pub fn is_read_paired(&self) -> bool {
        self.read_paired.unwrap_or(false)
    }

    pub fn is_proper_pair(&self) -> bool {
        self.proper_pair.unwrap_or(false)
    }

    pub fn is_duplicate_read(&self) -> bool {
        self.duplicate_read.unwrap_or(false)
    }

    pub fn is_failed_vendor_quality_checks(&self) -> bool {
        self.failed_vendor_quality_checks.unwrap_or(false)
    }

    pub fn is_secondary_alignment(&self) -> bool {
        self.secondary_alignment.unwrap_or(false)
    }

    pub fn is_supplementary_alignment(&self) -> bool {
        self.supplementary_alignment.unwrap_or(false)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    pub feature_id: Option<String>,
    pub name: Option<String>,
    pub source: Option<String>,
    /// Free-text feature type such as `exon`.
    pub feature_type: Option<String>,
    pub contig_name: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub strand: Option<Strand>,
}
