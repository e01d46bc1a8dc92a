use wavedelin::{Interval, IntervalSet, WaveError};

// 构造测试区间的辅助函数
fn iv(start: i64, end: i64) -> Interval {
    Interval::new(start, end)
}

#[test]
fn test_merge_overlapping_and_unsorted() {
    let set = IntervalSet::build(&[iv(5, 10), iv(1, 4), iv(9, 12)], 0).unwrap();

    // [5,10] 与 [9,12] 重叠合并；4 和 5 之间的间隙超过容差 0，不合并
    assert_eq!(set.intervals(), &[iv(1, 4), iv(5, 12)]);
}

#[test]
fn test_merge_idempotence() {
    let inputs = vec![iv(0, 3), iv(2, 8), iv(20, 25), iv(24, 30), iv(50, 50)];

    let once = IntervalSet::build(&inputs, 0).unwrap();
    let twice = IntervalSet::build(once.intervals(), 0).unwrap();

    assert_eq!(once, twice);
    println!("Idempotence: {} intervals stable after rebuild", once.len());
}

#[test]
fn test_union_coverage() {
    let inputs = vec![iv(10, 40), iv(35, 60), iv(100, 100), iv(90, 120), iv(7, 12)];
    let set = IntervalSet::build(&inputs, 0).unwrap();

    // 输入区间内的每个点都必须落在某个输出区间内
    for interval in &inputs {
        for point in interval.start..=interval.end {
            assert!(
                set.contains(point),
                "point {} from input [{}, {}] not covered",
                point,
                interval.start,
                interval.end
            );
        }
    }
}

#[test]
fn test_disjointness_beyond_tolerance() {
    let inputs = vec![iv(0, 5), iv(7, 9), iv(9, 14), iv(30, 31), iv(18, 20)];
    let tolerance = 1;
    let set = IntervalSet::build(&inputs, tolerance).unwrap();

    for pair in set.intervals().windows(2) {
        assert!(
            pair[0].end + tolerance < pair[1].start,
            "intervals [{}, {}] and [{}, {}] violate tolerance {}",
            pair[0].start,
            pair[0].end,
            pair[1].start,
            pair[1].end,
            tolerance
        );
    }
}

#[test]
fn test_degenerate_intervals() {
    // 退化区间（start == end）是合法输入
    let set = IntervalSet::build(&[iv(5, 5), iv(5, 5), iv(3, 3)], 0).unwrap();
    assert_eq!(set.intervals(), &[iv(3, 3), iv(5, 5)]);

    let bridged = IntervalSet::build(&[iv(5, 5), iv(3, 3)], 2).unwrap();
    assert_eq!(bridged.intervals(), &[iv(3, 5)]);
}

#[test]
fn test_invalid_interval_rejected() {
    let err = IntervalSet::build(&[iv(0, 10), iv(9, 2)], 0).unwrap_err();
    assert_eq!(err, WaveError::InvalidInterval(9, 2));
}

#[test]
fn test_tie_break_on_equal_starts() {
    let set = IntervalSet::build(&[iv(5, 20), iv(5, 7), iv(5, 5)], 0).unwrap();
    assert_eq!(set.intervals(), &[iv(5, 20)]);
}

#[test]
fn test_find_on_merged_set() {
    let set = IntervalSet::build(&[iv(0, 10), iv(40, 60), iv(55, 80)], 0).unwrap();

    assert_eq!(set.find(0), Some(0));
    assert_eq!(set.find(10), Some(0));
    assert_eq!(set.find(11), None);
    assert_eq!(set.find(70), Some(1));
    assert_eq!(set.find(81), None);
}
