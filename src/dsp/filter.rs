//! Moving Average Filter
//!
//! Smooths the noisy tuning ADC before any lock decision is made.
//! Keeps a fixed window of the last `N` raw samples and a running sum,
//! so each update costs one subtraction and one addition.

use crate::types::Sample;

/// Sliding-window moving average over raw ADC samples
///
/// The reported value is `floor(sum / N)`. Until [`seed`](Self::seed) is
/// called (or the first sample is observed) the window is empty.
#[derive(Clone, Debug)]
pub struct MovingAverage<const N: usize> {
    /// Delay line (circular buffer), oldest sample at `pos`
    window: [Sample; N],
    /// Next slot to overwrite
    pos: usize,
    /// Running sum of `window`
    sum: u32,
    /// Window has been filled
    seeded: bool,
}

impl<const N: usize> MovingAverage<N> {
    const NON_EMPTY: () = assert!(N > 0, "moving average window must hold at least one sample");

    /// Create an empty filter
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            window: [0; N],
            pos: 0,
            sum: 0,
            seeded: false,
        }
    }

    /// Window length
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the filter has not been seeded yet
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.seeded
    }

    /// Fill the whole window with `value`
    ///
    /// Used once with the first real reading so the average starts at the
    /// dial position instead of ramping up from zero.
    pub fn seed(&mut self, value: Sample) {
        self.window.fill(value);
        self.pos = 0;
        self.sum = u32::from(value) * N as u32;
        self.seeded = true;
    }

    /// Push a raw sample, evicting the oldest, and return the new average
    pub fn observe(&mut self, raw: Sample) -> Sample {
        if !self.seeded {
            self.seed(raw);
            return raw;
        }

        self.sum -= u32::from(self.window[self.pos]);
        self.window[self.pos] = raw;
        self.sum += u32::from(raw);
        self.pos = (self.pos + 1) % N;

        self.average()
    }

    /// Current average, None before seeding
    #[must_use]
    pub fn value(&self) -> Option<Sample> {
        self.seeded.then(|| self.average())
    }

    /// Running sum of the window contents
    #[must_use]
    pub const fn sum(&self) -> u32 {
        self.sum
    }

    /// Window contents, oldest first
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        let (newer, older) = self.window.split_at(self.pos);
        let len = if self.seeded { N } else { 0 };
        older.iter().chain(newer.iter()).copied().take(len)
    }

    fn average(&self) -> Sample {
        (self.sum / N as u32) as Sample
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}
