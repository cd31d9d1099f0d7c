//! Sliding-window drills: monotonic-deque extrema and a streaming moving
//! average.
//!
//! A window size of zero, or one larger than the input, produces an empty
//! result rather than an error.

use std::collections::VecDeque;

// =============================================================================
// Monotonic deque extrema
// =============================================================================

/// Maximum of every contiguous window of `window` elements.
///
/// The deque holds indices whose values decrease from front to back; the
/// front is always the maximum of the current window. Every index enters and
/// leaves once: O(n) time, O(window) space.
pub fn sliding_window_max<T: Ord + Copy>(values: &[T], window: usize) -> Vec<T> {
    sliding_extreme(values, window, |candidate, incoming| candidate <= incoming)
}

/// Minimum of every contiguous window of `window` elements.
pub fn sliding_window_min<T: Ord + Copy>(values: &[T], window: usize) -> Vec<T> {
    sliding_extreme(values, window, |candidate, incoming| candidate >= incoming)
}

/// `dominated(back, incoming)` is true when `back` can never again be the
/// answer once `incoming` has arrived.
fn sliding_extreme<T, F>(values: &[T], window: usize, dominated: F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    if window == 0 || window > values.len() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(values.len() - window + 1);
    let mut deque: VecDeque<usize> = VecDeque::with_capacity(window);

    for (i, value) in values.iter().enumerate() {
        // Expire the index that just slid out.
        if deque.front().is_some_and(|&front| front + window <= i) {
            deque.pop_front();
        }
        while deque.back().is_some_and(|&back| dominated(&values[back], value)) {
            deque.pop_back();
        }
        deque.push_back(i);

        if i + 1 >= window {
            if let Some(&front) = deque.front() {
                result.push(values[front]);
            }
        }
    }
    result
}

/// Reference O(n * window) implementation over `slice::windows`.
pub fn sliding_window_max_naive<T: Ord + Copy>(values: &[T], window: usize) -> Vec<T> {
    if window == 0 {
        return Vec::new();
    }
    values
        .windows(window)
        .filter_map(|w| w.iter().max().copied())
        .collect()
}

// =============================================================================
// Moving average
// =============================================================================

/// Fixed-size moving average over a stream, with a running sum.
///
/// The sum is updated incrementally and rebuilt from the buffered window
/// whenever an evicted value is larger in magnitude than the remainder.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    buffer: VecDeque<f64>,
    sum: f64,
}

impl MovingAverage {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            buffer: VecDeque::with_capacity(window),
            sum: 0.0,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Feeds one value; returns the average once the window is full.
    ///
    /// A zero-sized window never produces a value.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        if self.window == 0 {
            return None;
        }
        self.buffer.push_back(value);
        self.sum += value;
        if self.buffer.len() > self.window {
            if let Some(old) = self.buffer.pop_front() {
                self.sum -= old;
                // Evicting a value that dwarfs what remains cancels most of
                // the sum's precision; rebuild it from the window instead.
                if old.abs() > self.sum.abs() {
                    self.sum = self.buffer.iter().sum();
                }
            }
        }
        (self.buffer.len() == self.window).then(|| self.sum / self.window as f64)
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.sum = 0.0;
    }
}

/// Averages of every full window over `stream`.
pub fn moving_average<I>(stream: I, window: usize) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let mut avg = MovingAverage::new(window);
    stream
        .into_iter()
        .filter_map(|x| avg.push(x.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_window_max_example() {
        let values = [1, 3, -1, -3, 5, 3, 6, 7];
        assert_eq!(sliding_window_max(&values, 3), vec![3, 3, 5, 5, 6, 7]);
    }

    #[test]
    fn test_sliding_window_min_example() {
        let values = [1, 3, -1, -3, 5, 3, 6, 7];
        assert_eq!(sliding_window_min(&values, 3), vec![-1, -3, -3, -3, 3, 3]);
    }

    #[test]
    fn test_sliding_window_invalid_sizes() {
        let values = [4, 2, 12];
        assert!(sliding_window_max(&values, 0).is_empty());
        assert!(sliding_window_max(&values, 4).is_empty());
        assert!(sliding_window_max::<i32>(&[], 1).is_empty());
        assert!(sliding_window_max_naive(&values, 0).is_empty());
    }

    #[test]
    fn test_sliding_window_edges() {
        let values = [4, 2, 12, 3];
        assert_eq!(sliding_window_max(&values, 1), values.to_vec());
        assert_eq!(sliding_window_max(&values, 4), vec![12]);
    }

    #[test]
    fn test_sliding_window_with_duplicates() {
        let values = [5, 5, 5, 1, 5];
        assert_eq!(sliding_window_max(&values, 2), vec![5, 5, 5, 5]);
        assert_eq!(sliding_window_min(&values, 2), vec![5, 5, 1, 1]);
    }

    #[test]
    fn test_deque_matches_naive() {
        let values: Vec<i64> = (0..500).map(|i| (i * 37 % 101) - 50).collect();
        for window in [1, 2, 7, 50, 500] {
            assert_eq!(
                sliding_window_max(&values, window),
                sliding_window_max_naive(&values, window),
                "window {window}"
            );
        }
    }

    #[test]
    fn test_moving_average_example() {
        assert_eq!(moving_average([1, 2, 3, 4, 5], 3), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_moving_average_zero_window() {
        assert!(moving_average([1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_moving_average_stream_struct() {
        let mut avg = MovingAverage::new(2);
        assert_eq!(avg.push(1.0), None);
        assert_eq!(avg.push(3.0), Some(2.0));
        assert_eq!(avg.push(5.0), Some(4.0));
        avg.reset();
        assert_eq!(avg.push(10.0), None);
        assert_eq!(avg.window(), 2);
    }

    #[test]
    fn test_moving_average_recovers_after_large_value_leaves() {
        let mut avg = MovingAverage::new(1);
        assert_eq!(avg.push(1e16), Some(1e16));
        assert_eq!(avg.push(1.0), Some(1.0));

        let mut avg = MovingAverage::new(2);
        avg.push(1e16);
        avg.push(1.0);
        assert_eq!(avg.push(3.0), Some(2.0));
    }
}
