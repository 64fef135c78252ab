//! Last-write-wins request slots.
//!
//! Replaces per-widget busy flags: every invocation takes a token from the
//! slot for its logical operation, and a response is applied only if its
//! token is still the latest issued. A stale in-flight reply is dropped
//! instead of overwriting a newer one. `busy()` lets callers refuse to
//! start a second invocation while one is outstanding.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestSlot {
  issued: AtomicU64,
  settled: AtomicU64,
}

impl RequestSlot {
  pub fn new() -> Self {
    Self::default()
  }

  /// Take the next token. Monotonically increasing, starting at 1.
  pub fn issue(&self) -> u64 {
    self.issued.fetch_add(1, Ordering::SeqCst) + 1
  }

  /// True while a token has been issued but not yet settled.
  pub fn busy(&self) -> bool {
    self.settled.load(Ordering::SeqCst) < self.issued.load(Ordering::SeqCst)
  }

  /// Settle `token` and report whether its response should be applied:
  /// only the latest issued token wins.
  pub fn try_commit(&self, token: u64) -> bool {
    self.settled.fetch_max(token, Ordering::SeqCst);
    token == self.issued.load(Ordering::SeqCst)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokens_increase_monotonically() {
    let slot = RequestSlot::new();
    let a = slot.issue();
    let b = slot.issue();
    let c = slot.issue();
    assert!(a < b && b < c);
  }

  #[test]
  fn latest_token_wins_and_stale_is_dropped() {
    let slot = RequestSlot::new();
    let first = slot.issue();
    let second = slot.issue();
    // The older request resolves late: its reply must not be applied.
    assert!(!slot.try_commit(first));
    assert!(slot.try_commit(second));
  }

  #[test]
  fn busy_reflects_outstanding_work() {
    let slot = RequestSlot::new();
    assert!(!slot.busy());
    let t = slot.issue();
    assert!(slot.busy());
    assert!(slot.try_commit(t));
    assert!(!slot.busy());
  }

  #[test]
  fn superseded_request_keeps_the_slot_busy_until_the_newest_settles() {
    let slot = RequestSlot::new();
    let old = slot.issue();
    let new = slot.issue();
    assert!(!slot.try_commit(old));
    assert!(slot.busy());
    assert!(slot.try_commit(new));
    assert!(!slot.busy());
  }
}
