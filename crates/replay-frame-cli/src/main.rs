// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! replay-frame CLI
//!
//! Temporal URL and capture timestamp tools for working on replay wrapper
//! pages without a browser. Results go to stdout, one per line; logs go to
//! stderr and follow `RUST_LOG` (`warn` when unset).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use replay_frame_core::{
    extract_replay_url, extract_timestamp_from_cookie, extract_timestamp_from_url,
    format_timestamp, FrameConfig, UrlCodec,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Temporal URL and capture timestamp tools")]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the wrapper-visible URL for a capture
    OuterUrl(UrlArgs),
    /// Build the frame-visible (nested-rewrite) URL for a capture
    InnerUrl(UrlArgs),
    /// Print the capture timestamp encoded in a temporal URL
    ExtractTs {
        /// Temporal URL
        url: String,
    },
    /// Print the original URL embedded in a temporal URL
    ExtractUrl {
        /// Temporal URL
        url: String,
    },
    /// Print the capture timestamp carried by a cookie string
    CookieTs {
        /// Raw `document.cookie` / `Cookie:` header value
        cookie: String,
    },
    /// Render a capture timestamp for display
    FormatTs {
        /// `YYYYMMDDhhmmss` timestamp; shorter values are echoed unchanged
        ts: String,
        /// Render in the local offset instead of GMT
        #[arg(long)]
        local: bool,
    },
    /// Validate a wrapper-page JSON config and print the resolved values
    CheckConfig {
        /// Path to the JSON config
        path: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct UrlArgs {
    /// Prefix temporal URLs are rooted under
    #[arg(long, default_value = "/web/")]
    prefix: String,
    /// Capture timestamp (omit for the latest capture)
    #[arg(long)]
    ts: Option<String>,
    /// Original URL
    url: String,
}

fn run(cmd: Command) -> Result<Vec<String>> {
    let lines = match cmd {
        Command::OuterUrl(args) => {
            let ts = args.ts.unwrap_or_default();
            vec![UrlCodec::new(args.prefix).outer_url(&args.url, &ts)]
        }
        Command::InnerUrl(args) => {
            let ts = args.ts.unwrap_or_default();
            vec![UrlCodec::new(args.prefix).inner_url(&args.url, &ts)]
        }
        Command::ExtractTs { url } => vec![extract_timestamp_from_url(&url)],
        Command::ExtractUrl { url } => vec![extract_replay_url(&url)],
        Command::CookieTs { cookie } => vec![extract_timestamp_from_cookie(&cookie)],
        Command::FormatTs { ts, local } => vec![format_timestamp(&ts, !local)],
        Command::CheckConfig { path } => {
            let cfg = FrameConfig::from_path(&path)
                .with_context(|| format!("load config {}", path.display()))?;
            debug!(?cfg, "config ok");
            vec![
                format!("prefix: {}", cfg.prefix),
                format!("labels.live: {}", cfg.labels.live),
                format!("labels.replay: {}", cfg.labels.replay),
                format!("slots.captureInfo: {}", cfg.slots.capture_info),
                format!("slots.label: {}", cfg.slots.label),
            ]
        }
    };
    Ok(lines)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let lines = run(args.cmd)?;
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
