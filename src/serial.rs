// model = "claude-opus-4-5"
// created = "2026-02-05"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Serde support.
//!
//! A list serializes as a plain sequence of its elements - no backing
//! kind, no capacity. That keeps the wire shape identical across
//! backings, so a list serialized from one kind deserializes into any
//! other and compares structurally equal to the original.

use std::marker::PhantomData;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::ser::SerializeSeq;

use crate::backing::BackingSequence;
use crate::list::AdaptiveList;

impl<S> Serialize for AdaptiveList<S>
where
    S: BackingSequence,
    S::Item: Serialize,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        return seq.end();
    }
}

struct ListVisitor<S> {
    marker: PhantomData<S>,
}

impl<'de, S> Visitor<'de> for ListVisitor<S>
where
    S: BackingSequence,
    S::Item: Deserialize<'de>,
{
    type Value = AdaptiveList<S>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        return formatter.write_str("a sequence of list elements");
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut list = AdaptiveList::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(value) = access.next_element()? {
            list.push(value);
        }
        return Ok(list);
    }
}

impl<'de, S> Deserialize<'de> for AdaptiveList<S>
where
    S: BackingSequence,
    S::Item: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        return deserializer.deserialize_seq(ListVisitor {
            marker: PhantomData,
        });
    }
}
