pub mod post;

pub use post::Post;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize nullable strings as empty string.
/// Handles both missing fields and explicit null values.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize a nullable list of strings as an empty list.
pub(crate) fn deserialize_nullable_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
