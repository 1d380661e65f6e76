//! Record types and their request payloads.

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

// Payload fields treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
