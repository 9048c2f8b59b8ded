use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use di_uri::DigestUri;

#[derive(Args)]
pub struct InspectArgs {
    /// Treat the argument as a bare opaque part (algorithm;digest)
    #[arg(long)]
    opaque: bool,

    /// Digest URI to decode
    uri: String,
}

pub fn run(args: &InspectArgs) -> Result<i32> {
    let uri = if args.opaque {
        DigestUri::from_opaque(args.uri.as_str())
    } else {
        args.uri.parse::<DigestUri>()?
    };
    let hex = uri
        .hexdigest()
        .with_context(|| format!("cannot decode '{}'", args.uri))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "algorithm: {}", uri.algorithm())?;
    writeln!(out, "hex: {hex}")?;
    writeln!(out, "base64: {}", uri.b64digest(false))?;
    writeln!(out, "base64url: {}", uri.b64digest(true))?;
    if let Some(query) = uri.query() {
        for (key, values) in query.iter() {
            for value in values {
                writeln!(out, "query: {key}={value}")?;
            }
        }
    }

    Ok(0)
}
