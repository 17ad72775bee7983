//! Execution timeline (Gantt data).
//!
//! One segment per dispatched process, in execution order. Idle periods are
//! not segments; they show up as gaps between consecutive segments.

use serde::{Deserialize, Serialize};

use super::Process;

/// A single contiguous run of one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Name of the process that ran.
    pub process_name: String,
    /// Start time.
    pub start: f64,
    /// End time.
    pub end: f64,
    /// `end - start` (equals the process burst time).
    pub duration: f64,
}

impl TimelineSegment {
    /// Creates a segment running `duration` units from `start`.
    pub fn new(process_name: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            process_name: process_name.into(),
            start,
            end: start + duration,
            duration,
        }
    }
}

/// An interval where the CPU had nothing eligible to run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdleGap {
    pub start: f64,
    pub end: f64,
}

impl IdleGap {
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Ordered execution segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment. Segments must be pushed in execution order.
    pub fn push(&mut self, segment: TimelineSegment) {
        debug_assert!(
            self.segments
                .last()
                .map_or(true, |last| last.end <= segment.start),
            "timeline segments must not overlap"
        );
        self.segments.push(segment);
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment was recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates segments in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineSegment> {
        self.segments.iter()
    }

    /// End of the last segment (0 when empty).
    pub fn span_end(&self) -> f64 {
        self.segments.last().map(|s| s.end).unwrap_or(0.0)
    }

    /// Total time spent running processes.
    pub fn busy_time(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Idle intervals, including a leading gap when the first segment starts after `origin`.
    pub fn idle_gaps(&self, origin: f64) -> Vec<IdleGap> {
        let mut gaps = Vec::new();
        let mut cursor = origin;
        for segment in &self.segments {
            if segment.start > cursor {
                gaps.push(IdleGap {
                    start: cursor,
                    end: segment.start,
                });
            }
            cursor = segment.end;
        }
        gaps
    }

    /// Horizon used to scale a Gantt chart: the later of the last segment end
    /// and the largest deadline among `processes`.
    pub fn chart_horizon(&self, processes: &[Process]) -> f64 {
        processes
            .iter()
            .filter_map(Process::deadline)
            .fold(self.span_end(), f64::max)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineSegment;
    type IntoIter = std::slice::Iter<'a, TimelineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimelineSegment::new("P1", 0.0, 2.0));
        t.push(TimelineSegment::new("P2", 10.0, 3.0));
        t
    }

    #[test]
    fn test_segment_new() {
        let s = TimelineSegment::new("P1", 8.0, 9.0);
        assert_eq!(s.end, 17.0);
        assert_eq!(s.duration, 9.0);
    }

    #[test]
    fn test_span_and_busy_time() {
        let t = sample();
        assert_eq!(t.len(), 2);
        assert_eq!(t.span_end(), 13.0);
        assert_eq!(t.busy_time(), 5.0);
    }

    #[test]
    fn test_idle_gaps() {
        let t = sample();
        let gaps = t.idle_gaps(0.0);
        assert_eq!(gaps, vec![IdleGap { start: 2.0, end: 10.0 }]);
        assert_eq!(gaps[0].duration(), 8.0);
    }

    #[test]
    fn test_leading_idle_gap() {
        let mut t = Timeline::new();
        t.push(TimelineSegment::new("P1", 4.0, 1.0));
        assert_eq!(t.idle_gaps(0.0), vec![IdleGap { start: 0.0, end: 4.0 }]);
    }

    #[test]
    fn test_chart_horizon_uses_deadlines() {
        let t = sample();
        let processes = vec![
            Process::new(1, "P1", 2.0).with_deadline(40.0),
            Process::new(2, "P2", 3.0).with_arrival(10.0),
        ];
        assert_eq!(t.chart_horizon(&processes), 40.0);
        assert_eq!(t.chart_horizon(&[]), 13.0);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.span_end(), 0.0);
        assert!(t.idle_gaps(0.0).is_empty());
    }
}
