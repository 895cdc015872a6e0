//! Command line tool for inspecting and producing log chunk blobs.
//!
//! Encoded blobs are exchanged as hex text, chunk lists as JSON arrays of hex
//! strings.  Logs go to stderr so stdout stays machine readable.

mod args;
mod cmd;
mod output;
mod util;

use std::{io, process};

use tracing_subscriber::EnvFilter;

use crate::{
    args::{Args, Subcommand},
    cmd::{exec_decode, exec_encode, exec_gen_random, exec_join, exec_size},
};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    init_logging();

    let args: Args = argh::from_env();

    let result = match args.subc {
        Subcommand::Encode(a) => exec_encode(a),
        Subcommand::Decode(a) => exec_decode(a),
        Subcommand::Size(a) => exec_size(a),
        Subcommand::Join(a) => exec_join(a),
        Subcommand::GenRandom(a) => exec_gen_random(a),
    };

    if let Err(e) = result {
        eprintln!("ERROR\n{e:?}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
