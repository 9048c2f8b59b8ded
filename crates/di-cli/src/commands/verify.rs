use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use di_uri::{DigestUri, Source};

use crate::Cli;
use super::computer;

#[derive(Args)]
pub struct VerifyArgs {
    /// Read the content from stdin
    #[arg(long)]
    stdin: bool,

    /// Digest URI the content must match
    uri: String,

    /// File to check
    #[arg(value_name = "file")]
    file: Option<PathBuf>,
}

pub fn run(args: &VerifyArgs, cli: &Cli) -> Result<i32> {
    let uri: DigestUri = args.uri.parse()?;
    let computer = computer(cli)?;

    let (label, source) = match (&args.file, args.stdin) {
        (Some(_), true) => bail!("cannot verify a file and stdin at once"),
        (Some(file), false) => (file.display().to_string(), Source::open(file)?),
        (None, true) => ("-".to_string(), Source::stdin()),
        (None, false) => bail!("nothing to verify: give a file or --stdin"),
    };

    if computer.verify(&uri, source)? {
        println!("{label}: OK");
        Ok(0)
    } else {
        println!("{label}: FAILED");
        Ok(1)
    }
}
