// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use p2p_ads_checker::{
    AdvertCheckReport, AdvertCheckRequest, CheckOptions, CheckerError, check_advert, load_request,
};
use p2p_ads_domain::DefaultLocalizer;
use std::io::Write;
use tracing::info;

/// P2P Ads Checker - validates advert form documents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the advert check document. Reads stdin when omitted or `-`.
    #[arg(short, long)]
    input: Option<String>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,

    /// Floating rate offset limit in percent, overriding the document
    #[arg(long)]
    offset_limit: Option<f64>,
}

fn read_input(input: Option<&str>) -> Result<AdvertCheckRequest, CheckerError> {
    match input {
        None | Some("-") => {
            info!("Reading advert document from stdin");
            load_request(std::io::stdin().lock(), "stdin")
        }
        Some(path) => {
            info!("Reading advert document from: {}", path);
            let file = std::fs::File::open(path).map_err(|source| CheckerError::Read {
                source_name: path.to_string(),
                source,
            })?;
            load_request(std::io::BufReader::new(file), path)
        }
    }
}

fn write_report(report: &AdvertCheckReport, pretty: bool) -> Result<(), CheckerError> {
    let mut stdout = std::io::stdout().lock();
    let written = if pretty {
        serde_json::to_writer_pretty(&mut stdout, report)
    } else {
        serde_json::to_writer(&mut stdout, report)
    };
    written.map_err(|err| CheckerError::Write(err.into()))?;
    writeln!(stdout).map_err(CheckerError::Write)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options: CheckOptions = CheckOptions {
        offset_limit: args.offset_limit,
    };
    let request: AdvertCheckRequest = read_input(args.input.as_deref())?;
    let report: AdvertCheckReport = check_advert(&request, &options, &DefaultLocalizer)?;
    write_report(&report, args.pretty)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_stdin() {
        let args: Args = Args::try_parse_from(["p2p-ads-checker"]).unwrap();
        assert_eq!(args.input, None);
        assert!(!args.pretty);
        assert_eq!(args.offset_limit, None);
    }

    #[test]
    fn test_args_accept_file_and_offset_limit() {
        let args: Args = Args::try_parse_from([
            "p2p-ads-checker",
            "--input",
            "advert.json",
            "--pretty",
            "--offset-limit",
            "7.5",
        ])
        .unwrap();
        assert_eq!(args.input.as_deref(), Some("advert.json"));
        assert!(args.pretty);
        assert_eq!(args.offset_limit, Some(7.5));
    }

    #[test]
    fn test_missing_input_file_reports_path() {
        let err: CheckerError = read_input(Some("/nonexistent/advert.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read /nonexistent/advert.json"));
    }
}
