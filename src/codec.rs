//! Tagged-union sequence codec
//!
//! Arpio encodes polymorphic lists (selection rules, staged extras) as JSON
//! arrays whose elements each carry a discriminator field. The variant types
//! are serde internally tagged enums; this module adds the sequence-level
//! behavior on top of them:
//!
//! - an empty sequence always encodes as `[]`
//! - decoding reads each element's discriminator before decoding the payload
//! - unknown discriminators are either fatal ([`strict`]) or skipped
//!   ([`lenient`])
//!
//! Fields opt in with `#[serde(with = "crate::codec::strict")]` (or
//! `lenient`), so entity structs expose only the typed sequence.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A polymorphic value that serializes with a string discriminator field.
pub trait Tagged: Serialize + DeserializeOwned {
    /// Wire name of the discriminator field (e.g. `ruleType`).
    const TAG_FIELD: &'static str;

    /// Discriminator values this client knows how to decode.
    const KNOWN_KINDS: &'static [&'static str];

    /// Discriminator value of this element.
    fn kind(&self) -> &'static str;

    fn is_known_kind(kind: &str) -> bool {
        Self::KNOWN_KINDS.iter().any(|known| *known == kind)
    }
}

/// What to do with an element whose discriminator is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKind {
    Fail,
    Skip,
}

/// Encode a sequence as a JSON array of independently tagged elements.
pub fn encode<T: Tagged>(items: &[T]) -> serde_json::Result<Vec<Value>> {
    items.iter().map(serde_json::to_value).collect()
}

/// Decode a JSON array element by element, branching on the discriminator.
pub fn decode<T: Tagged>(raw: Vec<Value>, on_unknown: UnknownKind) -> Result<Vec<T>, String> {
    let mut items = Vec::with_capacity(raw.len());

    for element in raw {
        let kind = read_kind::<T>(&element)?;

        if !T::is_known_kind(&kind) {
            match on_unknown {
                UnknownKind::Fail => {
                    log::error!("Unhandled {} value: {:?}", T::TAG_FIELD, kind);
                    return Err(format!("unhandled {} value: {:?}", T::TAG_FIELD, kind));
                }
                UnknownKind::Skip => {
                    log::debug!("Ignoring element with unknown {}: {}", T::TAG_FIELD, kind);
                    continue;
                }
            }
        }

        let item = serde_json::from_value::<T>(element)
            .map_err(|e| format!("invalid {:?} element: {}", kind, e))?;
        items.push(item);
    }

    Ok(items)
}

/// Read only the discriminator of one element. A missing field reads as "".
fn read_kind<T: Tagged>(element: &Value) -> Result<String, String> {
    let object = element
        .as_object()
        .ok_or_else(|| format!("expected a JSON object, found {}", element))?;

    match object.get(T::TAG_FIELD) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(kind)) => Ok(kind.clone()),
        Some(other) => Err(format!(
            "{} must be a string, found {}",
            T::TAG_FIELD,
            other
        )),
    }
}

fn serialize_items<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Tagged,
{
    let values = encode(items).map_err(S::Error::custom)?;
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in &values {
        seq.serialize_element(value)?;
    }
    seq.end()
}

fn deserialize_items<'de, D, T>(deserializer: D, on_unknown: UnknownKind) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Tagged,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    decode(raw, on_unknown).map_err(D::Error::custom)
}

/// Unknown discriminators fail the whole decode.
pub mod strict {
    use super::*;

    pub fn serialize<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Tagged,
    {
        serialize_items(items, serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Tagged,
    {
        deserialize_items(deserializer, UnknownKind::Fail)
    }
}

/// Unknown discriminators are logged and dropped.
pub mod lenient {
    use super::*;

    pub fn serialize<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Tagged,
    {
        serialize_items(items, serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Tagged,
    {
        deserialize_items(deserializer, UnknownKind::Skip)
    }
}
