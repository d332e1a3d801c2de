//! How converters react to missing or unparseable input.

use crate::error::{BoxError, ConversionError, Result};
use log::{Level, Log, Record};
use serde::{Deserialize, Serialize};
use std::any::type_name;
use std::fmt::{self, Debug};

/// Log target for conversion warnings.
pub const LOG_TARGET: &str = "ga4gh_convert";

#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStringency {
    /// Fail the conversion.
    #[default]
    #[value(name = "strict")]
    Strict,
    /// Log a warning and substitute a default.
    #[value(name = "lenient")]
    Lenient,
    /// Substitute a default without logging.
    #[value(name = "silent")]
    Silent,
}

impl ConversionStringency {
    pub fn is_strict(self) -> bool {
        self == ConversionStringency::Strict
    }
}

impl fmt::Display for ConversionStringency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionStringency::Strict => write!(f, "strict"),
            ConversionStringency::Lenient => write!(f, "lenient"),
            ConversionStringency::Silent => write!(f, "silent"),
        }
    }
}

/// Type name with module paths stripped, e.g. `Vec<CigarUnit>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    fn flush(segment: &mut String, out: &mut String) {
        let name = segment.rsplit("::").next().unwrap_or(segment.as_str());
        out.push_str(name);
        segment.clear();
    }

    let mut out = String::new();
    let mut segment = String::new();
    for c in type_name::<T>().chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            flush(&mut segment, &mut out);
            out.push(c);
        }
    }
    flush(&mut segment, &mut out);
    out
}

/// Applies `stringency` to one anomaly met while converting `S` to `T`.
///
/// Strict returns the failure, lenient logs a warning to `logger`, silent does
/// nothing. Callers substitute their default on `Ok`.
pub fn warn_or_throw<S, T>(
    value: Option<&S>,
    message: &str,
    cause: Option<BoxError>,
    stringency: ConversionStringency,
    logger: &dyn Log,
) -> Result<()>
where
    S: Debug + ?Sized,
    T: ?Sized,
{
    let value = value.map(|v| format!("{:?}", v));
    match stringency {
        ConversionStringency::Strict => Err(ConversionError {
            source_type: short_type_name::<S>(),
            target_type: short_type_name::<T>(),
            value,
            message: message.to_string(),
            cause,
        }),
        ConversionStringency::Lenient => {
            let value = value.as_deref().unwrap_or("null");
            logger.log(
                &Record::builder()
                    .args(format_args!(
                        "could not convert {} to {}: {} (value: {}), substituting default",
                        short_type_name::<S>(),
                        short_type_name::<T>(),
                        message,
                        value
                    ))
                    .level(Level::Warn)
                    .target(LOG_TARGET)
                    .module_path_static(Some(module_path!()))
                    .file_static(Some(file!()))
                    .line(Some(line!()))
                    .build(),
            );
            Ok(())
        }
        ConversionStringency::Silent => Ok(()),
    }
}

/// Ladder form that hands back `default` when the stringency allows it.
///
/// `S` and `T` name the conversion in messages, as for [`warn_or_throw`].
pub fn resolve<S, T, D>(
    default: D,
    value: Option<&S>,
    message: &str,
    cause: Option<BoxError>,
    stringency: ConversionStringency,
    logger: &dyn Log,
) -> Result<D>
where
    S: Debug + ?Sized,
    T: ?Sized,
{
    warn_or_throw::<S, T>(value, message, cause, stringency, logger).map(|()| default)
}


#[cfg(test)]
mod tests {
    use super::testing::CapturingLogger;
    use super::*;
    use crate::error::CigarParseError;
    use std::error::Error as _;

    #[test]
    fn test_strict_returns_error() {
        let logger = CapturingLogger::default();
        let err = warn_or_throw::<str, u32>(
            Some("abc"),
            "could not parse",
            None,
            ConversionStringency::Strict,
            &logger,
        )
        .unwrap_err();
        assert_eq!(err.source_type, "str");
        assert_eq!(err.target_type, "u32");
        assert_eq!(err.value.as_deref(), Some("\"abc\""));
        assert_eq!(err.message, "could not parse");
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn test_strict_keeps_cause() {
        let logger = CapturingLogger::default();
        let cause = CigarParseError::MissingLength { offset: 0 };
        let err = warn_or_throw::<str, String>(
            Some("M"),
            "could not decode cigar",
            Some(Box::new(cause.clone())),
            ConversionStringency::Strict,
            &logger,
        )
        .unwrap_err();
        assert_eq!(err.source().unwrap().to_string(), cause.to_string());
    }

    #[test]
    fn test_lenient_logs_warning() {
        let logger = CapturingLogger::default();
        warn_or_throw::<str, u32>(None, "must not be null", None, ConversionStringency::Lenient, &logger)
            .unwrap();
        let warnings = logger.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("must not be null"));
        assert!(warnings[0].contains("value: null"));
    }

    #[test]
    fn test_silent_logs_nothing() {
        let logger = CapturingLogger::default();
        warn_or_throw::<str, u32>(None, "must not be null", None, ConversionStringency::Silent, &logger)
            .unwrap();
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn test_resolve_substitutes_default() {
        let logger = CapturingLogger::default();
        let value = resolve::<str, i64, _>(0, None, "missing", None, ConversionStringency::Silent, &logger);
        assert_eq!(value.unwrap(), 0);
        let value = resolve::<str, i64, _>(0, None, "missing", None, ConversionStringency::Strict, &logger);
        assert!(value.is_err());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<crate::formats::AlignmentRecord>(), "AlignmentRecord");
        assert_eq!(short_type_name::<str>(), "str");
        assert_eq!(short_type_name::<[crate::ga4gh::CigarUnit]>(), "[CigarUnit]");
        assert_eq!(short_type_name::<Vec<crate::ga4gh::CigarUnit>>(), "Vec<CigarUnit>");
    }

    #[test]
    fn test_stringency_from_toml_value() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            stringency: ConversionStringency,
        }
        let wrapper: Wrapper = toml::from_str("stringency = \"lenient\"").unwrap();
        assert_eq!(wrapper.stringency, ConversionStringency::Lenient);
        assert_eq!(ConversionStringency::default(), ConversionStringency::Strict);
        assert_eq!(ConversionStringency::Silent.to_string(), "silent");
    }
}
