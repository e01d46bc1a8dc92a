use crate::error::{Result, WaveError};

/// A closed interval `[start, end]` over sample indices
///
/// Plain value type; `start <= end` is checked where intervals enter
/// an operation (`IntervalSet::build`, `optimal_covering`), so callers
/// can construct literals freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Interval { start, end }
    }

    /// Interval length, `end - start`
    ///
    /// A degenerate interval (`start == end`) has length 0.
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `point` lies within the closed interval
    pub fn contains(&self, point: i64) -> bool {
        self.start <= point && point <= self.end
    }
}

/// An ordered set of disjoint intervals
///
/// Built from an arbitrary collection of closed intervals, which may be
/// unsorted, overlapping, or degenerate. The result is sorted ascending
/// by start, covers exactly the union of the inputs, and uses the fewest
/// intervals possible: two inputs are merged whenever they overlap or
/// the gap between them is within `tolerance`.
///
/// # Examples
///
/// ```rust
/// use wavedelin::{Interval, IntervalSet};
///
/// let set = IntervalSet::build(
///     &[Interval::new(5, 10), Interval::new(1, 4), Interval::new(9, 12)],
///     0,
/// )?;
///
/// // [5,10] and [9,12] overlap and merge; the gap between 4 and 5
/// // exceeds tolerance 0, so [1,4] stays separate
/// assert_eq!(set.intervals(), &[Interval::new(1, 4), Interval::new(5, 12)]);
/// # Ok::<(), wavedelin::WaveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Merges `intervals` into a minimal disjoint set
    ///
    /// Two intervals are mergeable when the gap between them is at most
    /// `tolerance`; consecutive intervals of the result always satisfy
    /// `prev.end + tolerance < next.start`.
    ///
    /// # Errors
    ///
    /// * `WaveError::InvalidInterval` - an input interval has `start > end`
    pub fn build(intervals: &[Interval], tolerance: i64) -> Result<Self> {
        for iv in intervals {
            if iv.start > iv.end {
                return Err(WaveError::InvalidInterval(iv.start, iv.end));
            }
        }

        // 按 start 升序排序，start 相同时按 end 升序
        let mut sorted = intervals.to_vec();
        sorted.sort_by_key(|iv| (iv.start, iv.end));

        // 从左到右扫描，维护一个运行区间
        let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
        for iv in sorted {
            if let Some(running) = merged.last_mut() {
                if iv.start <= running.end + tolerance {
                    running.end = running.end.max(iv.end);
                    continue;
                }
            }
            merged.push(iv);
        }

        Ok(IntervalSet { intervals: merged })
    }

    /// The merged intervals, sorted ascending by start
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Number of disjoint intervals in the set
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Index of the interval containing `point`, if any
    ///
    /// Intervals are disjoint, so a containing interval is unique.
    pub fn find(&self, point: i64) -> Option<usize> {
        let idx = self.intervals.partition_point(|iv| iv.end < point);
        if idx < self.intervals.len() && self.intervals[idx].contains(point) {
            Some(idx)
        } else {
            None
        }
    }

    /// Whether any interval of the set contains `point`
    pub fn contains(&self, point: i64) -> bool {
        self.find(point).is_some()
    }
}
