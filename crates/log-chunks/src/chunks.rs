//! Log chunk container types.

use std::{slice, vec};

use arbitrary::Arbitrary;
use strata_codec::{Codec, CodecError, Decoder, Encoder};
use serde::{Deserialize, Serialize};

use crate::codec::{decode, encode_into};

/// One opaque piece of per-block data.
///
/// Serializes as a lowercase hex string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Arbitrary, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogChunk(#[serde(with = "hex::serde")] Vec<u8>);

impl LogChunk {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for LogChunk {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for LogChunk {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl AsRef<[u8]> for LogChunk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Ordered list of log chunks for one block.
///
/// Immutable once built.  Combining vectors with [`join`] produces a new
/// value and leaves the inputs alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Arbitrary, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogChunks(Vec<LogChunk>);

impl LogChunks {
    /// Wraps the chunks as given, in order.
    ///
    /// Chunk lengths are only checked when encoding.
    pub fn new(chunks: Vec<LogChunk>) -> Self {
        Self(chunks)
    }

    /// Builds from raw byte buffers.
    pub fn from_raw(chunks: Vec<Vec<u8>>) -> Self {
        Self(chunks.into_iter().map(LogChunk::new).collect())
    }

    pub fn new_empty() -> Self {
        Self(Vec::new())
    }

    pub fn chunks(&self) -> &[LogChunk] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogChunk> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<LogChunk> {
        self.0
    }

    /// Same as the free [`join`].
    pub fn join(vectors: &[LogChunks]) -> LogChunks {
        join(vectors)
    }
}

impl From<Vec<LogChunk>> for LogChunks {
    fn from(value: Vec<LogChunk>) -> Self {
        Self(value)
    }
}

impl FromIterator<LogChunk> for LogChunks {
    fn from_iter<I: IntoIterator<Item = LogChunk>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LogChunks {
    type Item = LogChunk;
    type IntoIter = vec::IntoIter<LogChunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogChunks {
    type Item = &'a LogChunk;
    type IntoIter = slice::Iter<'a, LogChunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Consumes the decoder to exhaustion, so a log chunk region has to be the
/// last thing in any frame it's embedded in.
impl Codec for LogChunks {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        Ok(encode_into(self, enc)?)
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        // Decoder can't report how much input is left, so pull the rest of
        // it a byte at a time and decode that as a region.
        let mut region = Vec::new();
        while let Ok([byte]) = dec.read_arr::<1>() {
            region.push(byte);
        }

        Ok(decode(&region)?)
    }
}

/// Concatenates the chunk lists of each vector, in order.
///
/// No framing is added between inputs, so the encoding of the result is the
/// concatenation of the inputs' encodings.
pub fn join<'a>(vectors: impl IntoIterator<Item = &'a LogChunks>) -> LogChunks {
    vectors
        .into_iter()
        .flat_map(|v| v.iter().cloned())
        .collect()
}
