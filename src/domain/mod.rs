pub mod address;
pub mod bank;

use serde::{Deserialize, Deserializer};

/// Upstream sends `null` for fields it has no data for; treat those as the zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
