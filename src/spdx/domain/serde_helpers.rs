use serde::{Deserialize, Deserializer};

/// Deserializes an explicit JSON `null` as the type's default value.
///
/// Combined with the container-level `#[serde(default)]`, a field that is
/// absent and a field that is `null` load the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
