//! Encoding and decoding of log chunk vectors.

use strata_codec::Encoder;
use tracing::{debug, trace};

use crate::{ChunkCursor, LogChunk, LogChunks, LogChunksError, LogChunksResult};

/// Size of the big-endian length prefix in front of every chunk.
pub const LEN_PREFIX_SIZE: usize = 4;

/// Returns the exact number of bytes [`encode`] produces for `chunks`.
pub fn serialized_length(chunks: &LogChunks) -> usize {
    chunks.iter().map(|c| c.len() + LEN_PREFIX_SIZE).sum()
}

/// Encodes the chunks into a buffer of exactly [`serialized_length`] bytes.
pub fn encode(chunks: &LogChunks) -> LogChunksResult<Vec<u8>> {
    let lens = len_prefixes(chunks)?;
    let mut buf = Vec::with_capacity(serialized_length(chunks));
    write_chunks(chunks, &lens, &mut buf)?;
    Ok(buf)
}

/// Writes the chunks to an existing encoder.
///
/// Every length is checked before anything is written, so an oversized chunk
/// leaves the encoder untouched.
pub fn encode_into(chunks: &LogChunks, enc: &mut impl Encoder) -> LogChunksResult<()> {
    let lens = len_prefixes(chunks)?;
    write_chunks(chunks, &lens, enc)
}

fn write_chunks(chunks: &LogChunks, lens: &[u32], enc: &mut impl Encoder) -> LogChunksResult<()> {
    for (len, chunk) in lens.iter().zip(chunks.iter()) {
        enc.write_buf(&len.to_be_bytes())?;
        enc.write_buf(chunk.as_bytes())?;
    }

    trace!(chunks = chunks.len(), "encoded log chunks");
    Ok(())
}

/// Decodes a whole buffer as a log chunk region.
pub fn decode(buf: &[u8]) -> LogChunksResult<LogChunks> {
    decode_from(&mut ChunkCursor::new(buf))
}

/// Decodes chunks from the cursor until it is exhausted.
///
/// Running out exactly on a chunk boundary is the normal way to stop.
/// Running out inside a length field or a chunk body is an error, and nothing
/// decoded up to that point is returned.  Offsets in errors are relative to
/// the cursor's position on entry.
pub fn decode_from(cur: &mut ChunkCursor<'_>) -> LogChunksResult<LogChunks> {
    let start = cur.position();
    let mut chunks = Vec::new();

    while !cur.is_exhausted() {
        let len = cur
            .take_arr::<LEN_PREFIX_SIZE>()
            .ok_or_else(|| truncated(cur, start, LEN_PREFIX_SIZE))?;
        let len = u32::from_be_bytes(len) as usize;

        // Checked against the input before copying, so a bogus length can't
        // trigger a huge allocation.
        let body = cur.take(len).ok_or_else(|| truncated(cur, start, len))?;

        chunks.push(LogChunk::new(body.to_vec()));
    }

    trace!(
        chunks = chunks.len(),
        bytes = cur.position() - start,
        "decoded log chunks"
    );
    Ok(LogChunks::new(chunks))
}

fn len_prefixes(chunks: &LogChunks) -> LogChunksResult<Vec<u32>> {
    chunks
        .iter()
        .enumerate()
        .map(|(index, c)| len_prefix(index, c.len()))
        .collect()
}

fn len_prefix(index: usize, len: usize) -> LogChunksResult<u32> {
    u32::try_from(len).map_err(|_| LogChunksError::ChunkTooLarge { index, len })
}

fn truncated(cur: &ChunkCursor<'_>, start: usize, wanted: usize) -> LogChunksError {
    let err = LogChunksError::Truncated {
        offset: cur.position() - start,
        wanted,
        remaining: cur.remaining_len(),
    };
    debug!(%err, "failed to decode log chunks");
    err
}
