//! Serde mapping for store-assigned identifiers.
//!
//! Mongo hands back `_id` ObjectIds; the API surfaces them as opaque hex
//! strings under `id`. Deserialization accepts either form so the same entity
//! types work against BSON documents and plain JSON fixtures.

use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(id: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::ObjectId(oid)) => Ok(Some(oid.to_hex())),
        Some(Bson::String(s)) => Ok(Some(s)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected an ObjectId or string id, got {}",
            other
        ))),
    }
}
