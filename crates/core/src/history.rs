//! Bounded position history for charting.

use std::collections::VecDeque;
use travelsim_types::HistoryPoint;

/// Default number of samples retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// Fixed-capacity FIFO of chart samples.
///
/// Appending beyond capacity evicts the oldest samples. Existing entries are
/// never reordered or modified.
#[derive(Debug, Clone)]
pub struct HistoryRecorder {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl Default for HistoryRecorder {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryRecorder {
    /// Create an empty recorder with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty recorder keeping at most `capacity` samples (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest ones on overflow.
    pub fn record(&mut self, point: HistoryPoint) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryPoint> + '_ {
        self.points.iter()
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.points.back()
    }

    /// Maximum number of samples retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(t: f64) -> HistoryPoint {
        HistoryPoint::new(t, t * 10.0, 400.0 - t * 6.0)
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut history = HistoryRecorder::new();
        history.record(sample(0.0));
        history.record(sample(0.5));

        assert_eq!(history.len(), 2);
        assert_eq!(history.iter().next().map(|p| p.time), Some(0.0));
        assert_eq!(history.latest().map(|p| p.time), Some(0.5));
    }

    #[test]
    fn test_overflow_keeps_most_recent() {
        let mut history = HistoryRecorder::new();
        for i in 0..1500 {
            history.record(sample(i as f64));
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(history.iter().next().map(|p| p.time), Some(500.0));
        assert_eq!(history.latest().map(|p| p.time), Some(1499.0));

        let times: Vec<f64> = history.iter().map(|p| p.time).collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_small_capacity() {
        let mut history = HistoryRecorder::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        history.record(sample(1.0));
        history.record(sample(2.0));
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![sample(2.0)]);
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryRecorder::new();
        history.record(sample(1.0));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
