//! `EmailAddress` as a plain `local@domain` string.
//!
//! Deserializing goes through [`EmailAddress::from_str`](std::str::FromStr),
//! so an invalid address is a deserialization error.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::EmailAddress;

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for EmailAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
