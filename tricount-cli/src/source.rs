//! Input source readers.
//!
//! Each source (file or standard input) is read line-by-line and fed into
//! its own aggregator; the only suspension points are the reads themselves.
//! Aggregation never suspends.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tricount_core::{FrequencyMap, PhraseAggregator};

/// Reads one file and aggregates its phrase counts.
///
/// # Errors
///
/// Fails when the file cannot be opened or a line cannot be read (missing
/// file, permission denied, bytes that are not valid UTF-8). The caller
/// decides whether that sinks the whole run; per the orchestrator's policy
/// it never does when other sources remain.
pub async fn count_file(path: &Path) -> Result<FrequencyMap> {
    let file = File::open(path)
        .await
        .with_context(|| format!("failed to open {}", path.display()))?;

    count_reader(BufReader::new(file))
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Reads standard input to exhaustion and aggregates its phrase counts.
pub async fn count_stdin() -> Result<FrequencyMap> {
    count_reader(BufReader::new(tokio::io::stdin()))
        .await
        .context("failed to read standard input")
}

async fn count_reader<R>(reader: R) -> std::io::Result<FrequencyMap>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut agg = PhraseAggregator::new();

    while let Some(line) = lines.next_line().await? {
        agg.feed(&line);
    }

    Ok(agg.finish())
}
