use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Generates record identifiers from the current clock, forced strictly
/// monotonic so two adds within the same millisecond never collide.
///
/// Identifiers stay plain integers to remain compatible with the ids in
/// the static dataset.
#[derive(Debug, Default)]
pub struct RecordIdGenerator {
    last: AtomicU64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    pub fn next(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let ids = RecordIdGenerator::new();
        let first = ids.next();
        let second = ids.next();
        assert!(second > first);
    }

    #[test]
    fn test_burst_of_ids_is_collision_free() {
        let ids = RecordIdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next()));
        }
    }
}
