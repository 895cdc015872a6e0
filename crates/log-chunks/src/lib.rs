//! Log chunk vectors and their wire encoding.
//!
//! A [`LogChunks`] is an ordered list of opaque byte chunks, one per piece of
//! unverified per-block data (encrypted note preimages and the like).  It is
//! encoded as a plain sequence of length-prefixed tuples:
//!
//! ```text
//! encoded := tuple*
//! tuple   := length:u32(big-endian) ++ bytes[length]
//! ```
//!
//! There is no magic, version tag, or chunk count.  The end of the region is
//! the end of the input, so the caller has to know where the region stops.

mod chunks;
pub use chunks::{LogChunk, LogChunks, join};

mod codec;
pub use codec::{LEN_PREFIX_SIZE, decode, decode_from, encode, encode_into, serialized_length};

mod cursor;
pub use cursor::ChunkCursor;

mod errors;
pub use errors::{LogChunksError, LogChunksResult};

mod fixture;
pub use fixture::{RANDOM_CHUNK_LEN, random_fixture};
