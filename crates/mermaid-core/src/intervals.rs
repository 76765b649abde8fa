//! Style intervals and style layers.

/// Style ID type. UI/theme layers map these to concrete colors.
pub type StyleId = u32;

/// Built-in style id for renderer error markers.
///
/// Encoded as `0x0400_0000 | severity`, with severity `1` = error.
pub const DIAGNOSTIC_ERROR_STYLE_ID: StyleId = 0x0400_0001;

/// Style layer ID
///
/// Distinguishes style sources so one layer can be replaced or cleared without touching the
/// others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleLayerId(pub u32);

impl StyleLayerId {
    /// Create a style layer id from a raw numeric identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Token-based syntax highlighting.
    pub const MERMAID_SYNTAX: Self = Self(1);

    /// Inline renderer error markers.
    pub const DIAGNOSTICS: Self = Self(2);
}

/// A styled half-open range `[start, end)` in character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Start offset
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Style ID
    pub style_id: StyleId,
}

impl Interval {
    /// Create a new interval with `[start, end)` offsets and a style id.
    pub fn new(start: usize, end: usize, style_id: StyleId) -> Self {
        Self {
            start,
            end,
            style_id,
        }
    }

    /// Check if interval contains a specific position
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if two intervals overlap
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The intervals of one style layer, sorted by start offset.
///
/// Point queries binary-search the start offsets and walk backwards, stopping as soon as the
/// running maximum of end offsets shows no earlier interval can reach the point.
#[derive(Debug, Clone, Default)]
pub struct StyleLayer {
    intervals: Vec<Interval>,
    /// `prefix_max_end[i] = max(intervals[0..=i].end)`
    prefix_max_end: Vec<usize>,
}

impl StyleLayer {
    /// Build a layer, discarding empty intervals.
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        let mut intervals: Vec<Interval> =
            intervals.into_iter().filter(|i| i.start < i.end).collect();
        intervals.sort_by_key(|i| (i.start, i.end));

        let mut prefix_max_end = Vec::with_capacity(intervals.len());
        let mut max_end = 0;
        for interval in &intervals {
            max_end = max_end.max(interval.end);
            prefix_max_end.push(max_end);
        }

        Self {
            intervals,
            prefix_max_end,
        }
    }

    /// All intervals containing `pos`.
    pub fn query_point(&self, pos: usize) -> Vec<&Interval> {
        let idx = self.intervals.partition_point(|i| i.start <= pos);

        let mut result = Vec::new();
        for i in (0..idx).rev() {
            if self.prefix_max_end[i] <= pos {
                break;
            }
            if self.intervals[i].contains(pos) {
                result.push(&self.intervals[i]);
            }
        }
        result
    }

    /// All intervals overlapping `[start, end)`.
    pub fn query_range(&self, start: usize, end: usize) -> Vec<&Interval> {
        if start >= end {
            return Vec::new();
        }
        let probe = Interval::new(start, end, 0);
        let upper = self.intervals.partition_point(|i| i.start < end);
        self.intervals[..upper]
            .iter()
            .filter(|i| i.overlaps(&probe))
            .collect()
    }

    /// Intervals in start order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the layer holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(10, 20, 1);
        assert!(interval.contains(10));
        assert!(interval.contains(19));
        assert!(!interval.contains(20));
        assert!(!interval.contains(9));
    }

    #[test]
    fn test_interval_overlaps() {
        let i1 = Interval::new(10, 20, 1);
        let i2 = Interval::new(15, 25, 2);
        let i3 = Interval::new(25, 30, 3);

        assert!(i1.overlaps(&i2));
        assert!(i2.overlaps(&i1));
        assert!(!i2.overlaps(&i3));
    }

    #[test]
    fn test_layer_drops_empty_and_sorts() {
        let layer = StyleLayer::from_intervals(vec![
            Interval::new(15, 25, 3),
            Interval::new(4, 4, 9),
            Interval::new(5, 15, 2),
        ]);

        assert_eq!(layer.len(), 2);
        assert_eq!(layer.intervals()[0].start, 5);
    }

    #[test]
    fn test_layer_query_point() {
        let layer = StyleLayer::from_intervals(vec![
            Interval::new(10, 20, 1),
            Interval::new(5, 15, 2),
            Interval::new(15, 25, 3),
        ]);

        assert_eq!(layer.query_point(12).len(), 2);
        assert_eq!(layer.query_point(18).len(), 2);
        assert!(layer.query_point(25).is_empty());
    }

    #[test]
    fn test_layer_query_range() {
        let layer = StyleLayer::from_intervals(vec![
            Interval::new(0, 5, 1),
            Interval::new(5, 10, 2),
            Interval::new(10, 15, 3),
        ]);

        let hits: Vec<StyleId> = layer.query_range(4, 11).iter().map(|i| i.style_id).collect();
        assert_eq!(hits, vec![1, 2, 3]);
        assert!(layer.query_range(7, 7).is_empty());
    }
}
