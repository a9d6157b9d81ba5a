//! Bounded newest-first record buffer.
//!
//! `QuoteBuffer` holds the ordered record sequence behind the panel: index 0
//! is always the most recently generated record. The buffer is bounded by
//! `max_len`; prepending past the bound drops the oldest (tail) entries, which
//! trades historical depth for a fixed memory footprint under indefinite
//! runtime.

use std::collections::VecDeque;

use bond_common::record::QuoteRecord;

/// Ordered, bounded, newest-first record sequence.
#[derive(Debug)]
pub struct QuoteBuffer {
    records: VecDeque<QuoteRecord>,
    max_len: usize,
}

impl QuoteBuffer {
    /// Empty buffer bounded to `max_len` records.
    pub fn new(max_len: usize) -> Self {
        QuoteBuffer {
            records: VecDeque::new(),
            max_len,
        }
    }

    /// Configured bound.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Current number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the buffer holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend `batch` and truncate to the bound.
    ///
    /// The batch arrives in generation order (oldest first); pushing each
    /// record to the front reverses it, so the batch's newest record lands at
    /// index 0 and the newest-first ordering holds across the whole buffer.
    /// Oldest tail entries beyond `max_len` are discarded.
    pub fn prepend(&mut self, batch: Vec<QuoteRecord>) {
        for record in batch {
            self.records.push_front(record);
        }
        self.records.truncate(self.max_len);
    }

    /// Record at `index` (0 = newest), if in range.
    pub fn get(&self, index: usize) -> Option<&QuoteRecord> {
        self.records.get(index)
    }

    /// Iterate newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &QuoteRecord> {
        self.records.iter()
    }

    /// Contiguous snapshot of the buffer, newest first, for display handoff.
    pub fn snapshot(&self) -> Vec<QuoteRecord> {
        self.records.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::QuoteGenerator;

    fn batch_at(count: usize, base_ms: u64) -> Vec<QuoteRecord> {
        QuoteGenerator::pure_random().generate_batch(count, base_ms)
    }

    #[test]
    fn test_prepend_length_law() {
        // len' = min(len + n, max_len) for all n >= 0.
        let mut buf = QuoteBuffer::new(10);
        buf.prepend(batch_at(0, 0));
        assert_eq!(buf.len(), 0);
        buf.prepend(batch_at(4, 100));
        assert_eq!(buf.len(), 4);
        buf.prepend(batch_at(4, 200));
        assert_eq!(buf.len(), 8);
        buf.prepend(batch_at(4, 300));
        assert_eq!(buf.len(), 10);
    }

    #[test]
    fn test_truncation_drops_oldest() {
        let mut buf = QuoteBuffer::new(5);
        buf.prepend(batch_at(5, 100));
        buf.prepend(batch_at(3, 200));
        assert_eq!(buf.len(), 5);
        // The three newest plus the two newest survivors of the first batch.
        let times: Vec<u64> = buf.iter().map(|r| r.transact_time).collect();
        assert_eq!(times, vec![204, 202, 200, 108, 106]);
    }

    #[test]
    fn test_newest_first_adjacency_invariant() {
        let mut buf = QuoteBuffer::new(50);
        for tick in 0..5u64 {
            buf.prepend(batch_at(7, 1_000 * (tick + 1)));
        }
        let times: Vec<u64> = buf.iter().map(|r| r.transact_time).collect();
        for pair in times.windows(2) {
            assert!(pair[0] >= pair[1], "ordering violated: {:?}", pair);
        }
    }

    #[test]
    fn test_snapshot_matches_iteration_order() {
        let mut buf = QuoteBuffer::new(10);
        buf.prepend(batch_at(3, 100));
        let snap = buf.snapshot();
        assert_eq!(snap.len(), 3);
        assert_eq!(snap[0].transact_time, 104);
        assert_eq!(buf.get(0).unwrap().transact_time, 104);
    }
}
