use crate::config::OutputFormat;
use crate::stringency::ConversionStringency;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a native alignment record (JSON) to a GA4GH read alignment
    Read {
        /// Path to the alignment record JSON document
        record_file: String,

        /// Error handling policy (default: from config, else strict)
        #[arg(long, value_enum)]
        stringency: Option<ConversionStringency>,

        /// Output encoding (default: from config, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file, stdout when omitted
        #[arg(short = 'o', long = "output")]
        output_file: Option<String>,
    },

    /// Convert a native feature (JSON) to a GA4GH feature
    Feature {
        /// Path to the feature JSON document
        record_file: String,

        /// Error handling policy (default: from config, else strict)
        #[arg(long, value_enum)]
        stringency: Option<ConversionStringency>,

        /// Output encoding (default: from config, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file, stdout when omitted
        #[arg(short = 'o', long = "output")]
        output_file: Option<String>,
    },

    /// Decode a CIGAR string and print its GA4GH units
    Cigar {
        /// CIGAR text, e.g. 10M2I5M
        cigar: String,

        /// Error handling policy (default: from config, else strict)
        #[arg(long, value_enum)]
        stringency: Option<ConversionStringency>,
    },
}
