//! Input/output and configuration helpers for the `logchunk-tool` binary.

use std::{
    env, fs,
    io::{self, Read, Write},
    path::Path,
    str::FromStr,
};

use anyhow::Context;

/// Output format environment variable.
const OUTPUT_FORMAT_ENVVAR: &str = "LOGCHUNK_OUTPUT_FORMAT";

/// The default output format to use.
const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::Json;

/// How listings are printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Json,
    Porcelain,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "porcelain" => Ok(Self::Porcelain),
            f => anyhow::bail!("unsupported output format: {f}"),
        }
    }
}

/// Resolves the [`OutputFormat`].
///
/// Priority:
///
/// 1. Command-line argument (if provided)
/// 2. `LOGCHUNK_OUTPUT_FORMAT` environment variable (if set)
/// 3. Default format (JSON)
pub(crate) fn resolve_output_format(arg: Option<&str>) -> anyhow::Result<OutputFormat> {
    resolve_output_format_from(arg, env::var(OUTPUT_FORMAT_ENVVAR).ok().as_deref())
}

fn resolve_output_format_from(
    arg: Option<&str>,
    env_value: Option<&str>,
) -> anyhow::Result<OutputFormat> {
    if let Some(f) = arg {
        return f.parse();
    }

    if let Some(f) = env_value {
        return f
            .parse()
            .with_context(|| format!("invalid {OUTPUT_FORMAT_ENVVAR}"));
    }

    Ok(DEFAULT_OUTPUT_FORMAT)
}

/// Reads a whole file, or stdin if no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Writes `content` plus a newline to a file, or stdout if no path is given.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(p) => fs::write(p, format!("{content}\n"))
            .with_context(|| format!("failed to write {}", p.display())),
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{content}").context("failed to write stdout")
        }
    }
}

/// Parses a hex blob, ignoring surrounding whitespace and an optional `0x`.
pub(crate) fn parse_hex_blob(s: &str) -> anyhow::Result<Vec<u8>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).context("invalid hex blob")
}
