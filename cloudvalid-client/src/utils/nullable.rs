//! Treat an explicit JSON `null` like an absent field.
//!
//! Pair with `#[serde(default)]` on the containing struct:
//!
//! ```ignore
//! #[serde(deserialize_with = "nullable::deserialize")]
//! pub use_cases: Vec<String>,
//! ```

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
