//! Subcommand implementations.

use anyhow::Context;
use logchunk_types::{LogChunks, decode, encode, random_fixture};
use rand_core::OsRng;
use tracing::{debug, info};

use crate::{
    args::{SubcDecode, SubcEncode, SubcGenRandom, SubcJoin, SubcSize},
    output::{ChunkListing, SizeSummary, render},
    util::{parse_hex_blob, read_input, resolve_output_format, write_output},
};

pub(crate) fn exec_encode(args: SubcEncode) -> anyhow::Result<()> {
    let chunks = parse_chunk_list(&read_input(args.input.as_deref())?)?;
    let encoded = encode(&chunks).context("failed to encode chunks")?;
    debug!(chunks = chunks.len(), bytes = encoded.len(), "encoded");
    write_output(args.output.as_deref(), &hex::encode(encoded))
}

pub(crate) fn exec_decode(args: SubcDecode) -> anyhow::Result<()> {
    let format = resolve_output_format(args.format.as_deref())?;
    let blob = parse_hex_blob(&read_input(args.input.as_deref())?)?;
    let chunks = decode(&blob).context("failed to decode blob")?;
    write_output(None, &render(&ChunkListing::new(&chunks), format)?)
}

pub(crate) fn exec_size(args: SubcSize) -> anyhow::Result<()> {
    let format = resolve_output_format(args.format.as_deref())?;
    let chunks = parse_chunk_list(&read_input(args.input.as_deref())?)?;
    write_output(None, &render(&SizeSummary::new(&chunks), format)?)
}

pub(crate) fn exec_join(args: SubcJoin) -> anyhow::Result<()> {
    let parts = args
        .inputs
        .iter()
        .map(|p| {
            let blob = parse_hex_blob(&read_input(Some(p.as_path()))?)?;
            decode(&blob).with_context(|| format!("failed to decode {}", p.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let joined = LogChunks::join(&parts);
    info!(inputs = parts.len(), chunks = joined.len(), "joined blobs");

    let encoded = encode(&joined).context("failed to encode joined chunks")?;
    write_output(args.output.as_deref(), &hex::encode(encoded))
}

pub(crate) fn exec_gen_random(args: SubcGenRandom) -> anyhow::Result<()> {
    let chunks = random_fixture(&mut OsRng, args.count);

    if args.encoded {
        let encoded = encode(&chunks).context("failed to encode chunks")?;
        return write_output(None, &hex::encode(encoded));
    }

    let format = resolve_output_format(args.format.as_deref())?;
    write_output(None, &render(&ChunkListing::new(&chunks), format)?)
}

fn parse_chunk_list(s: &str) -> anyhow::Result<LogChunks> {
    serde_json::from_str(s).context("expected a JSON array of hex strings")
}
