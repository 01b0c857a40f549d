// model = "claude-opus-4-5"
// created = "2026-02-04"
// modified = "2026-02-04"
// driver = "Isaac Clayton"

//! Simple counters for understanding which traversal path runs.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

pub static NAIVE_RUNS: AtomicU64 = AtomicU64::new(0);
pub static BATCHED_RUNS: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn naive_run() {
    NAIVE_RUNS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn batched_run() {
    BATCHED_RUNS.fetch_add(1, Ordering::Relaxed);
}

pub fn reset() {
    NAIVE_RUNS.store(0, Ordering::Relaxed);
    BATCHED_RUNS.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let naive = NAIVE_RUNS.load(Ordering::Relaxed);
    let batched = BATCHED_RUNS.load(Ordering::Relaxed);
    let total = naive + batched;
    let batched_rate = if total > 0 {
        batched as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    return format!(
        "Traversals: {} naive, {} batched ({:.1}% batched)",
        naive, batched, batched_rate,
    );
}
