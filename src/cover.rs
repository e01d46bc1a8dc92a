use crate::error::{Result, WaveError};
use crate::interval::{Interval, IntervalSet};

/// Result of [`optimal_covering`]
///
/// `intervals` is the covering, sorted ascending. When traceback was
/// requested, `traceback[i]` is the index of the covering interval that
/// contains the `i`-th *input* point (input order, duplicates included).
#[derive(Debug, Clone, PartialEq)]
pub struct CoveringResult {
    pub intervals: Vec<Interval>,
    pub traceback: Option<Vec<usize>>,
}

/// Builds a small set of windows covering every given point
///
/// Used to pick visualization/extraction windows around sparse events
/// (e.g. ectopic beats) in a long recording: points closer together than
/// `split_threshold` share a window, and every window is grown to at
/// least `min_len` samples, clipped to `total`.
///
/// The covering is a greedy heuristic: grouping is decided left to right
/// by `split_threshold`, and minimum-length expansion may make adjacent
/// windows overlap, in which case they are merged. The result is minimal
/// for this grouping rule, not a proven global optimum.
///
/// # Arguments
///
/// * `total` - the full span of the recording, `[start, end]`
/// * `points` - sample positions that must be covered; order and
///   duplicates are irrelevant
/// * `min_len` - minimum length (`end - start`) of each output interval
/// * `split_threshold` - maximum gap between consecutive points sharing
///   one window
/// * `traceback` - whether to report which window each point landed in
///
/// # Errors
///
/// * `WaveError::InvalidInterval` - `total` has `start > end`
/// * `WaveError::InvalidMinLength` - `min_len` is not positive
/// * `WaveError::IntervalTooSmall` - `min_len` exceeds the length of `total`
/// * `WaveError::PointOutOfBounds` - a point lies outside `total`
///
/// # Examples
///
/// ```rust
/// use wavedelin::{optimal_covering, Interval};
///
/// let result = optimal_covering(
///     Interval::new(0, 1000),
///     &[50, 55, 900],
///     100,
///     20,
///     true,
/// )?;
///
/// // {50, 55} share a window, 900 gets its own
/// assert_eq!(result.intervals.len(), 2);
/// assert!(result.intervals.iter().all(|iv| iv.len() >= 100));
/// assert_eq!(result.traceback, Some(vec![0, 0, 1]));
/// # Ok::<(), wavedelin::WaveError>(())
/// ```
///
/// Windowing ectopic beats with a 3 second minimum window at 400 Hz:
///
/// ```rust
/// use wavedelin::{optimal_covering, Interval};
///
/// let fs = 400;
/// let ectopic_beats = vec![12_800, 13_050, 998_000];
/// let covering = optimal_covering(
///     Interval::new(0, 1_200_000),
///     &ectopic_beats,
///     3 * fs,
///     3 * fs,
///     false,
/// )?;
///
/// assert_eq!(covering.intervals.len(), 2);
/// # Ok::<(), wavedelin::WaveError>(())
/// ```
pub fn optimal_covering(
    total: Interval,
    points: &[i64],
    min_len: i64,
    split_threshold: i64,
    traceback: bool,
) -> Result<CoveringResult> {
    if total.start > total.end {
        return Err(WaveError::InvalidInterval(total.start, total.end));
    }
    if min_len <= 0 {
        return Err(WaveError::InvalidMinLength(min_len));
    }
    if min_len > total.len() {
        return Err(WaveError::IntervalTooSmall(min_len, total.len()));
    }
    for &p in points {
        if !total.contains(p) {
            return Err(WaveError::PointOutOfBounds(p, total.start, total.end));
        }
    }

    if points.is_empty() {
        return Ok(CoveringResult {
            intervals: Vec::new(),
            traceback: traceback.then(Vec::new),
        });
    }

    let mut sorted = points.to_vec();
    sorted.sort_unstable();

    // 按 split_threshold 把点聚成簇，每簇产生一个原始区间 [first, last]
    let mut raw: Vec<Interval> = Vec::new();
    let mut first = sorted[0];
    let mut last = sorted[0];
    for &p in &sorted[1..] {
        if p - last <= split_threshold {
            last = p;
        } else {
            raw.push(Interval::new(first, last));
            first = p;
            last = p;
        }
    }
    raw.push(Interval::new(first, last));

    // 把过短的区间扩展到 min_len，再合并因扩展而重叠的区间
    let expanded: Vec<Interval> = raw
        .into_iter()
        .map(|iv| expand_to_min_len(iv, total, min_len))
        .collect();
    let merged = IntervalSet::build(&expanded, 0)?;

    let traceback = if traceback {
        let mut tb = Vec::with_capacity(points.len());
        for &p in points {
            let idx = merged
                .find(p)
                .ok_or(WaveError::PointOutOfBounds(p, total.start, total.end))?;
            tb.push(idx);
        }
        Some(tb)
    } else {
        None
    };

    Ok(CoveringResult {
        intervals: merged.intervals().to_vec(),
        traceback,
    })
}

/// Grows `iv` symmetrically until its length reaches `min_len`
///
/// Growth blocked by a boundary of `total` is taken entirely from the
/// other end. Requires `min_len <= total.len()`, so the result never
/// leaves `total`.
fn expand_to_min_len(iv: Interval, total: Interval, min_len: i64) -> Interval {
    let deficit = min_len - iv.len();
    if deficit <= 0 {
        return iv;
    }

    // 左端取一半，右端取其余
    let mut start = iv.start - deficit / 2;
    let mut end = iv.end + (deficit - deficit / 2);

    if start < total.start {
        end += total.start - start;
        start = total.start;
    }
    if end > total.end {
        start -= end - total.end;
        end = total.end;
    }
    start = start.max(total.start);

    Interval::new(start, end)
}
