use crate::error::Result;
use crate::stringency::ConversionStringency;
use log::Log;

/// Converts one value of `S` into a new value of `T`.
///
/// `None` as source stands for an absent value. Implementations route every
/// anomaly through [`warn_or_throw`](crate::stringency::warn_or_throw), so
/// `Ok(None)` is only returned under lenient or silent stringency.
pub trait Converter<S: ?Sized, T>: Send + Sync {
    fn convert(
        &self,
        source: Option<&S>,
        stringency: ConversionStringency,
        logger: &dyn Log,
    ) -> Result<Option<T>>;
}
