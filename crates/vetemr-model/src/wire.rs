//! Serde glue for the records service's slack JSON.

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` as the field's default.
///
/// `#[serde(default)]` only covers an absent key; an explicit `null` from
/// the service must degrade the same way, not fail the whole row.
pub(crate) fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
