// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Hoist CLI
//!
//! Processes the generated site under `docs/_dist`, prints the derived
//! headers to stdout and rewrites the affected pages in place.

use std::process::ExitCode;

use hoist::{ExtractorConfig, FsStore, HeaderExtractor};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "hoist=info".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hoist: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn run() -> hoist::Result<()> {
    let config = ExtractorConfig::default();
    let store = FsStore::new(&config.root)?;

    tracing::info!(root = %store.root().display(), version = hoist::VERSION, "Extracting headers");

    let stdout = std::io::stdout();
    let summary = HeaderExtractor::new(config)
        .run(store, &mut stdout.lock())
        .await?;

    tracing::info!(
        documents = summary.headers.len(),
        written = summary.written,
        "Done"
    );
    Ok(())
}
