//! Log chunk listing formatting implementations

use logchunk_types::{LogChunks, serialized_length};
use serde::Serialize;

use super::{helpers::porcelain_field, traits::Formattable};

/// Decoded log chunks displayed to the user
#[derive(Serialize, Debug)]
pub(crate) struct ChunkListing<'a> {
    pub(crate) chunk_count: usize,
    pub(crate) serialized_length: usize,
    pub(crate) chunks: &'a LogChunks,
}

impl<'a> ChunkListing<'a> {
    pub(crate) fn new(chunks: &'a LogChunks) -> Self {
        Self {
            chunk_count: chunks.len(),
            serialized_length: serialized_length(chunks),
            chunks,
        }
    }
}

impl Formattable for ChunkListing<'_> {
    fn format_porcelain(&self) -> String {
        let mut output = vec![
            porcelain_field("chunk_count", self.chunk_count),
            porcelain_field("serialized_length", self.serialized_length),
        ];

        for (i, chunk) in self.chunks.iter().enumerate() {
            output.push(porcelain_field(&format!("chunk.{i}.len"), chunk.len()));
            output.push(porcelain_field(
                &format!("chunk.{i}.data"),
                hex::encode(chunk.as_bytes()),
            ));
        }

        output.join("\n")
    }
}

/// Size of a chunk list without its contents
#[derive(Serialize, Debug)]
pub(crate) struct SizeSummary {
    pub(crate) chunk_count: usize,
    pub(crate) payload_bytes: usize,
    pub(crate) serialized_length: usize,
}

impl SizeSummary {
    pub(crate) fn new(chunks: &LogChunks) -> Self {
        Self {
            chunk_count: chunks.len(),
            payload_bytes: chunks.iter().map(|c| c.len()).sum(),
            serialized_length: serialized_length(chunks),
        }
    }
}

impl Formattable for SizeSummary {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("chunk_count", self.chunk_count),
            porcelain_field("payload_bytes", self.payload_bytes),
            porcelain_field("serialized_length", self.serialized_length),
        ]
        .join("\n")
    }
}
