use crate::models::Bucket;

/// Best contiguous run of buckets, `end` is exclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowMax {
    pub sum: i64,
    pub start: usize,
    pub end: usize,
}

/// Fixed size sliding window maximum over precomputed sums.
///
/// A window larger than the input shrinks to the whole input. On equal sums
/// the earliest window is kept.
pub fn max_window_sum(sums: &[i64], window_size: usize) -> WindowMax {
    let window_size = window_size.min(sums.len());

    let mut best = WindowMax {
        sum: sums[..window_size].iter().sum(),
        start: 0,
        end: window_size,
    };
    let mut current = best.sum;

    for index in window_size..sums.len() {
        current += sums[index] - sums[index - window_size];

        if current > best.sum {
            best = WindowMax {
                sum: current,
                start: index + 1 - window_size,
                end: index + 1,
            };
        }
    }

    best
}

pub fn best_window(buckets: &[Bucket], window_size: usize) -> WindowMax {
    let sums: Vec<i64> = buckets.iter().map(Bucket::total).collect();
    max_window_sum(&sums, window_size)
}

/// Timestamp of the first event in the bucket at `index`, if there is one.
pub fn start_timestamp(buckets: &[Bucket], index: usize) -> Option<i64> {
    buckets.get(index).and_then(Bucket::start_timestamp)
}
