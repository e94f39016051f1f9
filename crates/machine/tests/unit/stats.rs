//! # Statistics Tests

use quinesearch_core::stats::SearchStats;

#[test]
fn test_new_stats_are_zero() {
    let stats = SearchStats::default();
    assert_eq!(stats.simulated, 0);
    assert_eq!(stats.accepted, 0);
    assert_eq!(stats.rejected, 0);
    assert_eq!(stats.iterations, 0);
    assert_eq!(stats.max_depth, 0);
    assert!(stats.acceptance_rate().abs() < f64::EPSILON);
}

#[test]
fn test_record_counts_candidates() {
    let mut stats = SearchStats::default();
    stats.record(1, true);
    stats.record(2, false);
    stats.record(3, true);
    stats.record(2, true);

    assert_eq!(stats.simulated, 4);
    assert_eq!(stats.accepted, 3);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.iterations, 8);
    assert_eq!(stats.max_depth, 3);
    assert!((stats.acceptance_rate() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_rejected_candidates_do_not_raise_depth() {
    let mut stats = SearchStats::default();
    stats.record(16, false);
    assert_eq!(stats.max_depth, 0);
}

#[test]
fn test_display_block() {
    let mut stats = SearchStats::default();
    stats.record(2, true);
    let text = stats.to_string();
    assert!(text.contains("SEED SEARCH STATISTICS"));
    assert!(text.contains("candidates_simulated     1"));
    assert!(text.contains("candidates_accepted      1"));
    assert!(text.contains("max_depth                2"));
}
