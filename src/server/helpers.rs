use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use super::error_mapping::ApiError;

/// Body accepted by create and update.
///
/// Keys match `Name` and `Quantity` ignoring ASCII case, and when a field
/// appears more than once the last non-null value wins. Missing or `null`
/// fields keep their zero value and unknown fields (such as `Id`) are
/// ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemPayload {
    pub name: String,
    pub quantity: i64,
}

impl<'de> Deserialize<'de> for ItemPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = ItemPayload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with Name and Quantity")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ItemPayload, A::Error> {
        let mut payload = ItemPayload::default();
        // Entries arrive in document order, so later keys overwrite earlier ones.
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("Name") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    payload.name = name;
                }
            } else if key.eq_ignore_ascii_case("Quantity") {
                if let Some(quantity) = map.next_value::<Option<i64>>()? {
                    payload.quantity = quantity;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(payload)
    }
}

/// Decode the first JSON value of `body` into an [`ItemPayload`].
///
/// Bytes after the first value are ignored and a `null` body yields the
/// all-zero payload. An empty body or a value of the wrong shape is a
/// [`ApiError::BadRequest`] carrying the decoder's message.
pub fn decode_payload(body: &[u8]) -> Result<ItemPayload, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<ItemPayload>>();
    match values.next() {
        Some(Ok(payload)) => Ok(payload.unwrap_or_default()),
        Some(Err(e)) => Err(ApiError::BadRequest(e.to_string())),
        None => Err(ApiError::BadRequest("request body is empty".to_string())),
    }
}

pub fn nonempty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[must_use]
pub fn nonzero(v: i64) -> Option<i64> {
    if v == 0 {
        None
    } else {
        Some(v)
    }
}
