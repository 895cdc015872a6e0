use strata_codec::CodecError;
use thiserror::Error;

pub type LogChunksResult<T> = Result<T, LogChunksError>;

#[derive(Debug, Error)]
pub enum LogChunksError {
    /// Input ended inside a length field or a chunk body.
    ///
    /// `offset` is where the field being read starts, relative to the start
    /// of the log chunk region.
    #[error("truncated log chunks at offset {offset}: wanted {wanted} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        wanted: usize,
        remaining: usize,
    },

    /// Chunk is too long to carry in a `u32` length prefix.
    #[error("log chunk {index} is {len} bytes, too large to encode")]
    ChunkTooLarge { index: usize, len: usize },

    #[error("codec: {0}")]
    Codec(#[from] CodecError),
}

impl From<LogChunksError> for CodecError {
    fn from(err: LogChunksError) -> Self {
        match err {
            LogChunksError::Truncated { .. } => CodecError::MalformedField("log chunks"),
            LogChunksError::ChunkTooLarge { .. } => CodecError::OverflowContainer,
            LogChunksError::Codec(e) => e,
        }
    }
}
