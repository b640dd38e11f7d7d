//! Domain layer unit tests
//!
//! Tests for entities and the matching, aggregation and summary services.

use fsearch::domain::entities::{
    EntryMetadata, EntryType, ExtensionMode, MacTimes, MatchResult, MatchVerdict, RunCounters,
    ScanCriteria,
};
use fsearch::domain::services::{evaluate, MatchEvaluator, ResultAggregator, RunReport};
use proptest::prelude::*;
use rstest::*;
use std::path::PathBuf;
use std::time::{Duration, UNIX_EPOCH};

const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

// ============================================================================
// ScanCriteria Tests
// ============================================================================

#[rstest]
fn test_criteria_keep_input_verbatim() {
    let criteria = ScanCriteria::new("Evidence", ".TXT", HELLO_SHA256.to_uppercase());

    assert_eq!(criteria.target_path(), "Evidence");
    assert_eq!(criteria.target_ext(), ".TXT");
    assert_eq!(criteria.target_hash(), HELLO_SHA256.to_uppercase());
    assert_eq!(criteria.extension_mode(), ExtensionMode::Substring);
}

#[rstest]
#[case(HELLO_SHA256, true)]
#[case("2CF24DBA5FB0A30E26E83B2AC5B9E29E1B161E5C1FA7425E73043362938B9824", true)]
#[case("", false)]
#[case("2cf24dba", false)]
#[case("zz24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824", false)]
fn test_well_formed_hash(#[case] target: &str, #[case] expected: bool) {
    let criteria = ScanCriteria::new("", "", target);
    assert_eq!(criteria.has_well_formed_hash(), expected);
}

// ============================================================================
// MatchEvaluator Tests
// ============================================================================

#[rstest]
#[case::hash_only(Some(HELLO_SHA256), "/srv/data/blob.bin", MatchVerdict::new(true, false, false))]
#[case::ext_only(None, "/srv/data/report.TXT", MatchVerdict::new(false, true, false))]
#[case::path_only(None, "/srv/Evidence/blob.bin", MatchVerdict::new(false, false, true))]
#[case::all_three(Some(HELLO_SHA256), "/srv/evidence/a.txt", MatchVerdict::new(true, true, true))]
#[case::none(Some("00"), "/srv/data/blob.bin", MatchVerdict::new(false, false, false))]
fn test_evaluate_independent_verdicts(
    #[case] digest: Option<&str>,
    #[case] path: &str,
    #[case] expected: MatchVerdict,
) {
    let criteria = ScanCriteria::new("evidence", ".txt", HELLO_SHA256);
    assert_eq!(evaluate(&criteria, digest, path), expected);
}

#[rstest]
#[case(ExtensionMode::Substring, "/srv/archive.txt.bak", true)]
#[case(ExtensionMode::Suffix, "/srv/archive.txt.bak", false)]
#[case(ExtensionMode::Suffix, "/srv/archive.bak.TXT", true)]
#[case(ExtensionMode::Substring, "/srv/my.txtfiles/readme", true)]
fn test_extension_modes(#[case] mode: ExtensionMode, #[case] path: &str, #[case] expected: bool) {
    let criteria = ScanCriteria::new("zzz", ".txt", "").with_extension_mode(mode);
    assert_eq!(evaluate(&criteria, None, path).ext_match, expected);
}

#[rstest]
fn test_empty_targets_match_any_path() {
    let evaluator = MatchEvaluator::new(&ScanCriteria::new("", "", ""));
    let verdict = evaluator.evaluate(None, "/anything/at/all");

    assert!(verdict.ext_match);
    assert!(verdict.path_match);
    assert!(!verdict.hash_match);
}

#[rstest]
fn test_empty_hash_target_never_matches_a_digest() {
    let evaluator = MatchEvaluator::new(&ScanCriteria::new("zzz", "zzz", ""));
    assert!(!evaluator.evaluate(Some(HELLO_SHA256), "/a").hash_match);
}

// ============================================================================
// ResultAggregator Tests
// ============================================================================

fn row(name: &str, size: u64, verdict: MatchVerdict) -> MatchResult {
    let t = UNIX_EPOCH;
    let meta = EntryMetadata::new(
        PathBuf::from("/case").join(name),
        EntryType::File,
        size,
        MacTimes::new(t, t, t),
    );
    MatchResult::new(meta, verdict)
}

#[fixture]
fn path_hit() -> MatchVerdict {
    MatchVerdict::new(false, false, true)
}

#[rstest]
fn test_aggregator_counts(path_hit: MatchVerdict) {
    let mut aggregator = ResultAggregator::new();
    for _ in 0..5 {
        aggregator.record_processed();
    }
    aggregator.add(row("a", 1, path_hit));
    aggregator.add(row("b", 2, path_hit));

    assert_eq!(
        aggregator.counters(),
        RunCounters {
            files_processed: 5,
            files_matched: 2
        }
    );
    assert_eq!(aggregator.len(), 2);
}

#[rstest]
fn test_aggregator_orders_largest_first_and_keeps_ties(path_hit: MatchVerdict) {
    let mut aggregator = ResultAggregator::new();
    aggregator.add(row("small", 10, path_hit));
    aggregator.add(row("tie-1", 50, path_hit));
    aggregator.add(row("large", 900, path_hit));
    aggregator.add(row("tie-2", 50, path_hit));
    aggregator.add(row("empty", 0, path_hit));

    let names: Vec<_> = aggregator
        .finalize()
        .iter()
        .map(|r| r.metadata().file_name().to_string())
        .collect();

    assert_eq!(names, ["large", "tie-1", "tie-2", "small", "empty"]);
}

// ============================================================================
// RunReport Tests
// ============================================================================

#[rstest]
#[case(Duration::from_secs(0), "0:00:00")]
#[case(Duration::from_millis(59_999), "0:00:59")]
#[case(Duration::from_secs(61), "0:01:01")]
#[case(Duration::from_secs(36_000 + 7), "10:00:07")]
fn test_format_run_time(#[case] elapsed: Duration, #[case] expected: &str) {
    assert_eq!(RunReport::format_run_time(elapsed), expected);
}

#[rstest]
fn test_summary_matches_counters() {
    let counters = RunCounters {
        files_processed: 3,
        files_matched: 2,
    };
    let summary = RunReport::summarize(counters, Duration::from_millis(250));

    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.files_matched, 2);
    assert!(summary.elapsed_seconds >= 0.0);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_path_verdict_is_case_insensitive_substring(
        prefix in "[a-zA-Z/]{0,12}",
        needle in "[a-zA-Z]{1,8}",
        suffix in "[a-zA-Z./]{0,12}",
    ) {
        let path = format!("/{prefix}{needle}{suffix}");
        let criteria = ScanCriteria::new(needle.to_uppercase(), "", "");
        prop_assert!(evaluate(&criteria, None, &path).path_match);
    }

    #[test]
    fn prop_verdict_matches_contains(
        path in "/[a-z./]{0,24}",
        target in "[a-z.]{0,4}",
    ) {
        let criteria = ScanCriteria::new(target.clone(), target.clone(), "");
        let verdict = evaluate(&criteria, None, &path);
        prop_assert_eq!(verdict.path_match, path.contains(&target));
        prop_assert_eq!(verdict.ext_match, path.contains(&target));
    }

    #[test]
    fn prop_hash_verdict_is_case_insensitive_equality(digest in "[0-9a-f]{64}") {
        let criteria = ScanCriteria::new("", "", digest.to_uppercase());
        prop_assert!(evaluate(&criteria, Some(&digest), "/x").hash_match);
        prop_assert!(!evaluate(&criteria, None, "/x").hash_match);
    }

    #[test]
    fn prop_finalize_is_sorted_and_stable(sizes in proptest::collection::vec(0u64..8, 0..40)) {
        let mut aggregator = ResultAggregator::new();
        for (i, size) in sizes.iter().enumerate() {
            aggregator.add(row(&format!("{i:03}"), *size, MatchVerdict::new(false, true, false)));
        }

        let rows = aggregator.finalize();
        prop_assert_eq!(rows.len(), sizes.len());
        for pair in rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.size_bytes() >= b.size_bytes());
            if a.size_bytes() == b.size_bytes() {
                prop_assert!(a.metadata().file_name() < b.metadata().file_name());
            }
        }
    }
}
