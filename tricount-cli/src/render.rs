//! Console rendering for results and the run summary.

use std::fmt::Write;
use std::time::Duration;
use tricount_types::PhraseCount;

/// Renders the top-N table: rank, count, phrase.
pub fn render_top(entries: &[PhraseCount]) -> String {
    if entries.is_empty() {
        return "No phrases found (input has fewer than three words).".to_string();
    }

    let count_width = entries
        .iter()
        .map(|e| e.count.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    let _ = writeln!(out, "Top {} phrases:", entries.len());
    for (rank, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:>width$}  {}",
            rank + 1,
            entry.count,
            entry.phrase,
            width = count_width
        );
    }

    // drop the trailing newline; the caller prints with println!
    out.pop();
    out
}

/// Renders the one-line run summary.
pub fn render_summary(
    processed: usize,
    skipped: usize,
    distinct_phrases: usize,
    elapsed: Duration,
) -> String {
    let mut out = format!(
        "{} source{} processed",
        processed,
        if processed == 1 { "" } else { "s" }
    );
    if skipped > 0 {
        let _ = write!(out, ", {skipped} skipped");
    }
    let _ = write!(
        out,
        ", {distinct_phrases} distinct phrases, {:.3}s",
        elapsed.as_secs_f64()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ranked_rows() {
        let rendered = render_top(&[
            PhraseCount::new("the quick brown", 12),
            PhraseCount::new("quick brown fox", 7),
        ]);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Top 2 phrases:");
        assert_eq!(lines[1], "  1. 12  the quick brown");
        assert_eq!(lines[2], "  2.  7  quick brown fox");
    }

    #[test]
    fn counts_right_align_to_widest() {
        let rendered = render_top(&[
            PhraseCount::new("a a a", 100),
            PhraseCount::new("b b b", 9),
        ]);

        assert!(rendered.contains("  1. 100  a a a"));
        assert!(rendered.contains("  2.   9  b b b"));
    }

    #[test]
    fn empty_results_have_a_message() {
        let rendered = render_top(&[]);
        assert!(rendered.contains("fewer than three words"));
    }

    #[test]
    fn summary_mentions_skips_only_when_present() {
        let clean = render_summary(3, 0, 42, Duration::from_millis(1500));
        assert_eq!(clean, "3 sources processed, 42 distinct phrases, 1.500s");

        let with_skips = render_summary(2, 1, 10, Duration::from_millis(250));
        assert_eq!(
            with_skips,
            "2 sources processed, 1 skipped, 10 distinct phrases, 0.250s"
        );
    }

    #[test]
    fn summary_singular_source() {
        let s = render_summary(1, 0, 0, Duration::ZERO);
        assert!(s.starts_with("1 source processed"));
    }
}
