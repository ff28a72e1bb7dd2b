//! tricount - most-frequent three-word phrases in text
//!
//! Reads one or more files (or standard input), counts every three-word
//! phrase, and prints the top N by frequency. Files are processed as
//! independent concurrent tasks, each producing its own frequency map;
//! maps merge after all reads complete.
//!
//! Exit codes:
//!   0 - Success (even if some sources were skipped)
//!   1 - Argument validation failure, or every requested source failed

mod cli;
mod render;
mod source;

use anyhow::Result;
use cli::Args;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use tricount_core::{merge, top_n, FrequencyMap};

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    init_logging(&args);
    debug!("arguments: {args:?}");

    match run(args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("run failed: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");
}

/// Run the complete counting workflow. Returns the exit code.
async fn run(args: Args) -> Result<i32> {
    let start = Instant::now();

    let (aggregate, processed, skipped) = if args.files.is_empty() {
        info!("no files given, reading standard input");
        (source::count_stdin().await?, 1, 0)
    } else {
        count_files(args.files.clone()).await
    };

    if processed == 0 {
        anyhow::bail!("all {skipped} input sources failed");
    }

    let top = top_n(&aggregate, args.top);
    println!("{}", render::render_top(&top));
    info!(
        "{}",
        render::render_summary(processed, skipped, aggregate.len(), start.elapsed())
    );

    Ok(0)
}

/// Counts every file concurrently and merges the per-file maps.
///
/// Returns the merged map plus processed/skipped source counts. A failed
/// source is logged and contributes an empty map; it never aborts the run.
async fn count_files(files: Vec<PathBuf>) -> (FrequencyMap, usize, usize) {
    let handles: Vec<_> = files
        .into_iter()
        .map(|path| {
            tokio::spawn(async move {
                let result = source::count_file(&path).await;
                (path, result)
            })
        })
        .collect();

    let mut aggregate = FrequencyMap::default();
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for joined in futures::future::join_all(handles).await {
        match joined {
            Ok((path, Ok(map))) => {
                debug!("{}: {} distinct phrases", path.display(), map.len());
                aggregate = merge(aggregate, map);
                processed += 1;
            }
            Ok((path, Err(e))) => {
                warn!("skipping {}: {e:#}", path.display());
                skipped += 1;
            }
            Err(e) => {
                warn!("skipping source, task failed: {e}");
                skipped += 1;
            }
        }
    }

    (aggregate, processed, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[tokio::test]
    async fn merges_counts_across_files() {
        let a = fixture("one two three");
        let b = fixture("one two three one two three");

        let (map, processed, skipped) =
            count_files(vec![a.path().to_path_buf(), b.path().to_path_buf()]).await;

        assert_eq!(processed, 2);
        assert_eq!(skipped, 0);
        assert_eq!(map.get("one two three"), Some(&3));
    }

    #[tokio::test]
    async fn unreadable_source_is_skipped_not_fatal() {
        let good = fixture("alpha beta gamma");

        let (map, processed, skipped) = count_files(vec![
            good.path().to_path_buf(),
            PathBuf::from("/no/such/file.txt"),
        ])
        .await;

        assert_eq!(processed, 1);
        assert_eq!(skipped, 1);
        assert_eq!(map.get("alpha beta gamma"), Some(&1));
    }

    #[tokio::test]
    async fn all_sources_failing_leaves_empty_map() {
        let (map, processed, skipped) = count_files(vec![
            PathBuf::from("/no/such/a.txt"),
            PathBuf::from("/no/such/b.txt"),
        ])
        .await;

        assert_eq!(processed, 0);
        assert_eq!(skipped, 2);
        assert!(map.is_empty());
    }
}
