//! Command line arguments for the `logchunk-tool` binary.

use std::path::PathBuf;

use argh::FromArgs;

/// Args.
#[derive(FromArgs, Debug)]
pub(crate) struct Args {
    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    Encode(SubcEncode),
    Decode(SubcDecode),
    Size(SubcSize),
    Join(SubcJoin),
    GenRandom(SubcGenRandom),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "encode",
    description = "encodes a JSON list of hex chunks into a hex blob"
)]
pub(crate) struct SubcEncode {
    #[argh(option, description = "input JSON file (default stdin)", short = 'i')]
    pub(crate) input: Option<PathBuf>,

    #[argh(option, description = "output file (default stdout)", short = 'o')]
    pub(crate) output: Option<PathBuf>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "decode",
    description = "decodes a hex blob and lists its chunks"
)]
pub(crate) struct SubcDecode {
    #[argh(option, description = "input hex file (default stdin)", short = 'i')]
    pub(crate) input: Option<PathBuf>,

    #[argh(
        option,
        description = "output format: \"json\" or \"porcelain\" (default $LOGCHUNK_OUTPUT_FORMAT, then json)",
        short = 'f'
    )]
    pub(crate) format: Option<String>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "size",
    description = "prints the encoded length of a JSON list of hex chunks"
)]
pub(crate) struct SubcSize {
    #[argh(option, description = "input JSON file (default stdin)", short = 'i')]
    pub(crate) input: Option<PathBuf>,

    #[argh(
        option,
        description = "output format: \"json\" or \"porcelain\" (default $LOGCHUNK_OUTPUT_FORMAT, then json)",
        short = 'f'
    )]
    pub(crate) format: Option<String>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "join",
    description = "concatenates hex blobs, checking that each one decodes"
)]
pub(crate) struct SubcJoin {
    #[argh(positional, description = "hex blob files, in order")]
    pub(crate) inputs: Vec<PathBuf>,

    #[argh(option, description = "output file (default stdout)", short = 'o')]
    pub(crate) output: Option<PathBuf>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "gen-random",
    description = "generates random 144 byte chunks"
)]
pub(crate) struct SubcGenRandom {
    #[argh(option, description = "number of chunks", short = 'n')]
    pub(crate) count: usize,

    #[argh(switch, description = "print the encoded hex blob instead of a listing", short = 'e')]
    pub(crate) encoded: bool,

    #[argh(
        option,
        description = "output format: \"json\" or \"porcelain\" (default $LOGCHUNK_OUTPUT_FORMAT, then json)",
        short = 'f'
    )]
    pub(crate) format: Option<String>,
}
