//! Output formatting for listings printed by the tool.

mod chunks;
mod helpers;
mod traits;

pub(crate) use chunks::{ChunkListing, SizeSummary};
pub(crate) use traits::render;
