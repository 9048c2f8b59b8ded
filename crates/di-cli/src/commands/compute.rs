use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use di_uri::{ComputeRequest, QueryForm, Source};

use crate::Cli;
use super::computer;

#[derive(Args)]
pub struct ComputeArgs {
    /// Digest algorithm (default: digest.algorithm, then sha-256)
    #[arg(short = 'a', long)]
    algorithm: Option<String>,

    /// Attach a query parameter (key=value, repeatable)
    #[arg(short = 'q', long = "query", value_name = "key=value")]
    query: Vec<String>,

    /// Read the content from stdin
    #[arg(long)]
    stdin: bool,

    /// Digest a literal string
    #[arg(short = 's', long = "string", value_name = "text")]
    strings: Vec<String>,

    /// Files to digest
    #[arg(value_name = "file")]
    files: Vec<PathBuf>,
}

pub fn run(args: &ComputeArgs, cli: &Cli) -> Result<i32> {
    let computer = computer(cli)?;
    let query = parse_query(&args.query)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut sources = Vec::new();
    if args.stdin {
        sources.push(Source::stdin());
    }
    for text in &args.strings {
        sources.push(Source::scalar(text.as_str()));
    }
    for file in &args.files {
        sources.push(Source::open(file)?);
    }

    // No inputs still goes through compute so the error is the library's.
    if sources.is_empty() {
        computer.compute(request(None, args, query.as_ref()))?;
    }

    for source in sources {
        let uri = computer.compute(request(Some(source), args, query.as_ref()))?;
        writeln!(out, "{uri}")?;
    }

    Ok(0)
}

fn request<'a>(
    source: Option<Source<'a>>,
    args: &ComputeArgs,
    query: Option<&QueryForm>,
) -> ComputeRequest<'a> {
    let mut request = ComputeRequest::new();
    if let Some(source) = source {
        request = request.source(source);
    }
    if let Some(algorithm) = &args.algorithm {
        request = request.algorithm(algorithm.as_str());
    }
    if let Some(query) = query {
        request = request.query(query.clone());
    }
    request
}

fn parse_query(pairs: &[String]) -> Result<Option<QueryForm>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    let mut query = QueryForm::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => query.append(key, value),
            _ => bail!("invalid query parameter '{pair}': expected key=value"),
        }
    }
    Ok(Some(query))
}
