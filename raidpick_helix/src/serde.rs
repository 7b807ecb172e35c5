use ::serde::{Deserialize, Deserializer};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub fn rfc3339<'de, D>(deser: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use ::serde::de::Error as _;
    let s = <std::borrow::Cow<'_, str>>::deserialize(deser)?;
    OffsetDateTime::parse(&s, &Rfc3339).map_err(D::Error::custom)
}

/// Helix sometimes sends `null` where it means an empty list
pub fn null_as_default<'de, D, T>(deser: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deser).map(Option::unwrap_or_default)
}

/// Helix sends an empty cursor, or none at all, on the last page
pub fn empty_as_none<'de, D>(deser: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deser).map(|s| s.filter(|s| !s.is_empty()))
}
